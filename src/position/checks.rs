//! Check mask and pin map computation (C7), per spec.md §4.3.
//!
//! The teacher has nothing like this: its `gen_legal` (in `moves.rs`)
//! establishes legality by speculatively making every pseudo-legal move and
//! asking "is the king attacked now?" — correct, but it means every move,
//! pinned or not, pays for a full make/unmake round trip. This module is
//! grounded on the check-mask/pin-map architecture used across this pack's
//! `other_examples/` (several independent engines build exactly this
//! shape, e.g. `laura_core`'s `movegen.rs`), reworked against this crate's
//! mirrored square numbering and hyperbola-quintessence attack functions.

use super::{CheckMask, Pins, Position};
use crate::attacks::{bishop_attacks, knight_attacks, pawn_attacks, ray, rook_attacks};
use crate::bitboard::{bit, square_of, BitboardExt};
use crate::color::Color;
use crate::piece::{Piece, PieceKind};

/// Computes the check mask and pin map for `color`, as if it were the
/// side to move (the fields are cached for both colors so a move that
/// swings the turn back doesn't need to recompute its own side's state).
pub(super) fn compute(pos: &Position, color: Color) -> (CheckMask, Pins) {
    let enemy = !color;
    let king_sq = pos.king_square(color);

    let pawn_attackers = pawn_attacks(color, king_sq) & pos.pieces_of_kind(enemy, PieceKind::Pawn);
    let knight_attackers = knight_attacks(king_sq) & pos.pieces_of_kind(enemy, PieceKind::Knight);

    // Sliders "see through" the king's own square — a king stepping back
    // along a checking ray must still be considered in check there.
    let occ_without_king = pos.occupied() & !bit(king_sq);
    let rook_attackers = rook_attacks(king_sq, occ_without_king)
        & (pos.pieces_of_kind(enemy, PieceKind::Rook) | pos.pieces_of_kind(enemy, PieceKind::Queen));
    let bishop_attackers = bishop_attacks(king_sq, occ_without_king)
        & (pos.pieces_of_kind(enemy, PieceKind::Bishop) | pos.pieces_of_kind(enemy, PieceKind::Queen));

    let mut attacker_count = 0u32;
    let mut single_mask = crate::bitboard::NO_BITS;

    for sq in pawn_attackers.squares() {
        attacker_count += 1;
        single_mask = bit(sq);
    }
    for sq in knight_attackers.squares() {
        attacker_count += 1;
        single_mask = bit(sq);
    }
    for sq in rook_attackers.squares() {
        attacker_count += 1;
        single_mask = ray(sq, king_sq) ^ bit(king_sq);
    }
    for sq in bishop_attackers.squares() {
        attacker_count += 1;
        single_mask = ray(sq, king_sq) ^ bit(king_sq);
    }

    let check_mask = match attacker_count {
        0 => CheckMask::All,
        1 => CheckMask::Mask(single_mask),
        _ => CheckMask::Double,
    };

    (check_mask, compute_pins(pos, color, enemy, king_sq))
}

fn compute_pins(pos: &Position, color: Color, enemy: Color, king_sq: crate::square::Square) -> Pins {
    use crate::bitboard::{antidiagonal_mask_of, diagonal_mask_of, file_mask_of, rank_mask_of};

    let mut pins = Pins::new();
    let king_bit = bit(king_sq);

    let rank_file_line = (rank_mask_of(king_sq) | file_mask_of(king_sq)) & !king_bit;
    let diagonal_line = (diagonal_mask_of(king_sq) | antidiagonal_mask_of(king_sq)) & !king_bit;

    let rook_pinners =
        rank_file_line & (pos.pieces_of_kind(enemy, PieceKind::Rook) | pos.pieces_of_kind(enemy, PieceKind::Queen));
    let bishop_pinners = diagonal_line
        & (pos.pieces_of_kind(enemy, PieceKind::Bishop) | pos.pieces_of_kind(enemy, PieceKind::Queen));

    for slider_sq in (rook_pinners | bishop_pinners).squares() {
        let full_ray = ray(king_sq, slider_sq) ^ king_bit;
        let between = full_ray ^ bit(slider_sq);
        let occupants = between & pos.occupied();
        if crate::bitboard::pop_count(occupants) == 1 {
            let blocker_sq = square_of(occupants);
            if let Some(Piece { color: blocker_color, .. }) = pos.piece_on(blocker_sq) {
                if blocker_color == color {
                    pins.push(occupants, full_ray);
                }
            }
        }
    }

    pins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen;

    #[test]
    fn starting_position_has_all_check_mask_and_no_pins() {
        let pos = fen::parse(fen::START_FEN).unwrap();
        let (mask, pins) = compute(&pos, Color::White);
        assert_eq!(mask, CheckMask::All);
        for sq in 0u8..64 {
            assert!(!pins.is_pinned(bit(crate::square::Square::new(sq))));
        }
    }

    #[test]
    fn pinned_piece_is_recognised_on_the_back_rank() {
        // White king e1, white rook e2, black rook e8: the rook on e2 is pinned.
        let pos = fen::parse("4k3/8/8/8/8/8/4R3/4K2r w - - 0 1").unwrap();
        let (_, pins) = compute(&pos, Color::White);
        let e2 = crate::square::Square::from_algebraic("e2").unwrap();
        assert!(pins.is_pinned(bit(e2)));
    }

    #[test]
    fn single_checker_produces_capture_or_block_mask() {
        // White king e1, black rook e8, nothing between: check mask should
        // be the whole e-file between and including the rook.
        let pos = fen::parse("4r3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let (mask, _) = compute(&pos, Color::White);
        match mask {
            CheckMask::Mask(m) => {
                let e8 = crate::square::Square::from_algebraic("e8").unwrap();
                assert!(m & bit(e8) != 0);
            }
            other => panic!("expected a single-checker mask, got {other:?}"),
        }
    }
}
