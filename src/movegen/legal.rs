//! Filter / legality stage (C9), per spec.md §4.6.
//!
//! Ground: the teacher's `gen_legal`, which makes every pseudo-legal move,
//! asks `is_check`, and unmakes it. That's replaced here with the decision
//! table spec.md §4.6 spells out directly against the cached check mask and
//! pin map from `position::checks`, so legality is a handful of bitboard
//! tests instead of a full make/unmake per candidate.

use super::pseudo;
use crate::bitboard::bit;
use crate::moves::{Move, MoveFlag, MoveList};
use crate::position::{CheckMask, Position};

/// Every legal move for the side to move.
pub fn generate(pos: &Position) -> MoveList {
    let color = pos.side_to_move();
    let mut pseudo_legal = MoveList::new();

    if pos.check_mask(color) == CheckMask::Double {
        // King moves are already safety-checked during generation, so
        // there's nothing left for the filter stage to do.
        pseudo::king_only(pos, &mut pseudo_legal);
        return pseudo_legal;
    }

    pseudo::generate(pos, &mut pseudo_legal);

    let mut legal = MoveList::new();
    for mv in pseudo_legal {
        if is_legal(pos, &mv) {
            legal.push(mv);
        }
    }
    legal
}

fn is_legal(pos: &Position, mv: &Move) -> bool {
    if mv.piece.kind == crate::piece::PieceKind::King {
        // Safety was already enforced in C8 (spec.md §4.6, step 1).
        return true;
    }

    let color = pos.side_to_move();
    let check_mask = pos.check_mask(color);
    let source_bit = bit(mv.from);
    let target_bit = bit(mv.to);

    let filter = if let Some(pin_ray) = pos.pins(color).ray_of(source_bit) {
        match check_mask {
            CheckMask::All => pin_ray,
            _ => pin_ray & check_mask.bits(),
        }
    } else if check_mask == CheckMask::All {
        target_bit
    } else if mv.flag == MoveFlag::EnPassant {
        let captured_bit = bit(mv.captured_square().expect("en passant always names a captured square"));
        if captured_bit & check_mask.bits() != 0 {
            target_bit
        } else {
            crate::bitboard::NO_BITS
        }
    } else {
        check_mask.bits()
    };

    target_bit & filter != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let pos = Position::starting_position();
        assert_eq!(generate(&pos).len(), 20);
    }

    #[test]
    fn pinned_rook_may_only_move_along_the_pin_ray() {
        // White king e1, white rook e2 pinned by the black rook on e8.
        let pos = fen::parse("4r3/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
        let moves = generate(&pos);
        for mv in &moves {
            if mv.piece.kind == crate::piece::PieceKind::Rook {
                assert_eq!(mv.to.file(), crate::square::File::E);
            }
        }
    }

    #[test]
    fn double_check_only_generates_king_moves() {
        // White king e1 attacked by both a rook on e8 and a knight on f3.
        let pos = fen::parse("4r3/8/8/8/8/5n2/8/4K3 w - - 0 1").unwrap();
        let moves = generate(&pos);
        assert!(moves.iter().all(|m| m.piece.kind == crate::piece::PieceKind::King));
    }

    #[test]
    fn en_passant_that_does_not_remove_the_checker_is_illegal() {
        // White king e1 in check from a rook on e8; a white pawn on d5 could
        // capture en passant on c6, but that doesn't block or capture the
        // checking rook, so it must not appear among the legal moves.
        let pos = fen::parse("4r3/8/8/2pP4/8/8/8/4K3 w - c6 0 1").unwrap();
        let moves = generate(&pos);
        assert!(!moves.iter().any(|m| m.flag == MoveFlag::EnPassant));
    }

    #[test]
    fn en_passant_capture_after_double_push_is_legal() {
        // Black just double-pushed f7-f5; the white pawn on g5 capturing
        // en passant onto f6 must appear among the legal moves.
        let pos = fen::parse("1r4k1/p6p/1n4pP/2b2pP1/2p1KP2/8/1P1R4/7R w - f6 0 36").unwrap();
        let moves = generate(&pos);
        assert!(
            moves.iter().any(|m| m.flag == MoveFlag::EnPassant
                && m.from.to_string() == "g5"
                && m.to.to_string() == "f6"),
            "g5xf6 en passant must appear in the legal move list"
        );
    }
}
