//! Hyperbola-quintessence sliding attacks (C3).
//!
//! spec.md §1 names magic bitboards as an explicit non-goal in favor of
//! this technique; the teacher (`irrelevantpiadina-libchess`) instead
//! recurses blocker-by-blocker (`walk_to_blocker`), which isn't what's
//! wanted here. The formula below is reimplemented from spec.md §4.2,
//! grounded on `not-alien12-barnarok`'s `slider_attacks_hq` (one of this
//! pack's five example repos), restated using this crate's `Bitboard`/
//! `Square` types and the precomputed line masks from [`crate::bitboard`].

use crate::bitboard::{antidiagonal_mask_of, diagonal_mask_of, file_mask_of, rank_mask_of, Bitboard};
use crate::square::Square;

/// Sliding attacks along a single line (rank, file, diagonal or
/// anti-diagonal) given a blocker set and the line's mask, via the
/// subtract-and-reverse identity: doubling the slider's own bit and
/// subtracting it from the masked occupancy walks to the first blocker in
/// one direction; repeating on the bit-reversed mask walks the other way.
#[inline(always)]
fn hyperbola(loc: Bitboard, occ: Bitboard, line_mask: Bitboard) -> Bitboard {
    let o = occ & line_mask;
    let r = o.reverse_bits();
    let o = o.wrapping_sub(loc);
    let r = r.wrapping_sub(loc.reverse_bits());
    let o = o ^ r.reverse_bits();
    o & line_mask
}

#[inline(always)]
pub fn rook_attacks(square: Square, occ: Bitboard) -> Bitboard {
    let loc = crate::bitboard::bit(square);
    hyperbola(loc, occ, rank_mask_of(square)) | hyperbola(loc, occ, file_mask_of(square))
}

#[inline(always)]
pub fn bishop_attacks(square: Square, occ: Bitboard) -> Bitboard {
    let loc = crate::bitboard::bit(square);
    hyperbola(loc, occ, diagonal_mask_of(square)) | hyperbola(loc, occ, antidiagonal_mask_of(square))
}

#[inline(always)]
pub fn queen_attacks(square: Square, occ: Bitboard) -> Bitboard {
    rook_attacks(square, occ) | bishop_attacks(square, occ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::{bit, pop_count};

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        let d4 = Square::from_algebraic("d4").unwrap();
        assert_eq!(pop_count(rook_attacks(d4, bit(d4))), 14);
    }

    #[test]
    fn rook_attack_stops_at_first_blocker_and_includes_it() {
        let a1 = Square::from_algebraic("a1").unwrap();
        let a4 = Square::from_algebraic("a4").unwrap();
        let occ = bit(a1) | bit(a4);
        let attacks = rook_attacks(a1, occ);
        assert!(attacks & bit(a4) != 0);
        assert!(attacks & bit(Square::from_algebraic("a5").unwrap()) == 0);
    }

    #[test]
    fn bishop_on_empty_board_from_corner_sees_the_long_diagonal() {
        let h1 = Square::new(0);
        assert_eq!(pop_count(bishop_attacks(h1, bit(h1))), 7);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let d4 = Square::from_algebraic("d4").unwrap();
        let occ = bit(d4);
        assert_eq!(
            queen_attacks(d4, occ),
            rook_attacks(d4, occ) | bishop_attacks(d4, occ)
        );
    }
}
