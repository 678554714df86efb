//! Pseudo-legal move generation (C8), per spec.md §4.5.
//!
//! Ground: the teacher's `moves.rs` free functions (`pawn_moves`,
//! `knight_moves`, `rook_or_queen_moves`, `bishop_or_queen_moves`,
//! `king_moves`), restated against this crate's `Piece`/`Move` types and
//! hyperbola-quintessence sliders instead of the teacher's blocker walk.
//! King safety is folded into generation here exactly as spec.md §4.5
//! describes it (remove bits attacked with the king itself taken out of
//! occupancy), rather than left for the legality filter — that's what lets
//! [`super::legal`] treat every king move's filter as "trivially legal".

use crate::bitboard::{bit, BitboardExt};
use crate::castling::Side;
use crate::color::Color;
use crate::moves::{Move, MoveList};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::{File, Rank, Square};

#[inline(always)]
fn forward(color: Color) -> i32 {
    match color {
        Color::White => 8,
        Color::Black => -8,
    }
}

fn start_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Two,
        Color::Black => Rank::Seven,
    }
}

fn promotion_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Eight,
        Color::Black => Rank::One,
    }
}

fn home_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::One,
        Color::Black => Rank::Eight,
    }
}

/// Every pseudo-legal move for the side to move: every piece type plus
/// castling, but not yet filtered for pins or check (spec.md §4.6 does
/// that). Callers in double check should use [`king_only`] instead —
/// spec.md §4.6's "C8 emits only king moves" short-circuit.
pub fn generate(pos: &Position, moves: &mut MoveList) {
    let color = pos.side_to_move();
    pawn_moves(pos, color, moves);
    knight_moves(pos, color, moves);
    slider_moves(pos, color, PieceKind::Bishop, moves);
    slider_moves(pos, color, PieceKind::Rook, moves);
    slider_moves(pos, color, PieceKind::Queen, moves);
    king_moves(pos, color, moves);
    castling_moves(pos, color, moves);
}

/// Only the king's (already safety-filtered) moves — what's left to
/// generate once the side to move is in double check.
pub fn king_only(pos: &Position, moves: &mut MoveList) {
    king_moves(pos, pos.side_to_move(), moves);
}

fn pawn_moves(pos: &Position, color: Color, moves: &mut MoveList) {
    let piece = Piece::new(color, PieceKind::Pawn);
    let enemy = pos.color_bb(!color);
    let promo_rank = promotion_rank(color);

    for from in pos.pieces_of_kind(color, PieceKind::Pawn).squares() {
        let captures = crate::attacks::pawn_attacks(color, from) & enemy;
        for to in captures.squares() {
            let captured = pos.piece_on(to).expect("capture target is occupied");
            if to.rank() == promo_rank {
                for &kind in &PieceKind::PROMOTION_KINDS {
                    moves.push(Move::promo_capture(from, to, piece, captured, kind));
                }
            } else {
                moves.push(Move::capture(from, to, piece, captured));
            }
        }

        if let Some(ep) = pos.en_passant_target() {
            if crate::attacks::pawn_attacks(color, from) & bit(ep) != 0 {
                let captured_sq = ep.offset(-forward(color)).expect("en-passant target stays on board");
                if let Some(captured) = pos.piece_on(captured_sq) {
                    moves.push(Move::en_passant(from, ep, piece, captured));
                }
            }
        }

        let Some(up1) = from.offset(forward(color)) else { continue };
        if pos.piece_on(up1).is_some() {
            continue;
        }
        if up1.rank() == promo_rank {
            for &kind in &PieceKind::PROMOTION_KINDS {
                moves.push(Move::promotion(from, up1, piece, kind));
            }
            continue;
        }
        moves.push(Move::quiet(from, up1, piece));

        if from.rank() == start_rank(color) {
            let up2 = up1.offset(forward(color)).expect("double push stays on board");
            if pos.piece_on(up2).is_none() {
                moves.push(Move::double_push(from, up2, piece));
            }
        }
    }
}

fn knight_moves(pos: &Position, color: Color, moves: &mut MoveList) {
    let piece = Piece::new(color, PieceKind::Knight);
    let friendly = pos.color_bb(color);
    for from in pos.pieces_of_kind(color, PieceKind::Knight).squares() {
        let targets = crate::attacks::knight_attacks(from) & !friendly;
        push_targets(pos, piece, from, targets, moves);
    }
}

fn slider_moves(pos: &Position, color: Color, kind: PieceKind, moves: &mut MoveList) {
    let piece = Piece::new(color, kind);
    let friendly = pos.color_bb(color);
    for from in pos.pieces_of_kind(color, kind).squares() {
        // The piece is not its own blocker (spec.md §4.5).
        let occ = pos.occupied() & !bit(from);
        let attacks = match kind {
            PieceKind::Bishop => crate::attacks::bishop_attacks(from, occ),
            PieceKind::Rook => crate::attacks::rook_attacks(from, occ),
            PieceKind::Queen => crate::attacks::queen_attacks(from, occ),
            _ => unreachable!("slider_moves only called for bishop, rook, queen"),
        };
        push_targets(pos, piece, from, attacks & !friendly, moves);
    }
}

fn king_moves(pos: &Position, color: Color, moves: &mut MoveList) {
    let piece = Piece::new(color, PieceKind::King);
    let from = pos.king_square(color);
    let friendly = pos.color_bb(color);
    let candidates = crate::attacks::king_attacks(from) & !friendly;
    for to in candidates.squares() {
        if crate::position::attacks::is_attacked_by(pos, to, !color, Some(from)) {
            continue;
        }
        match pos.piece_on(to) {
            Some(captured) => moves.push(Move::capture(from, to, piece, captured)),
            None => moves.push(Move::quiet(from, to, piece)),
        }
    }
}

fn push_targets(pos: &Position, piece: Piece, from: Square, targets: crate::bitboard::Bitboard, moves: &mut MoveList) {
    for to in targets.squares() {
        match pos.piece_on(to) {
            Some(captured) => moves.push(Move::capture(from, to, piece, captured)),
            None => moves.push(Move::quiet(from, to, piece)),
        }
    }
}

/// Castling, offered only from the home square with every one of spec.md
/// §4.5's ordered conditions holding: rights set, the squares between king
/// and rook empty, the squares the king crosses not attacked (the starting
/// square counts for queenside, not for kingside — this project's
/// convention), and the king not currently in check.
fn castling_moves(pos: &Position, color: Color, moves: &mut MoveList) {
    let home = home_rank(color);
    let king_sq = pos.king_square(color);
    if king_sq != Square::from_file_rank(File::E, home) {
        return;
    }
    let enemy = !color;
    if pos.is_in_check(color) {
        return;
    }

    let rights = pos.castle_rights();
    let piece = Piece::new(color, PieceKind::King);

    if rights.kingside(color) {
        let f = Square::from_file_rank(File::F, home);
        let g = Square::from_file_rank(File::G, home);
        let empty = pos.piece_on(f).is_none() && pos.piece_on(g).is_none();
        let safe = !crate::position::attacks::is_attacked_by(pos, f, enemy, None)
            && !crate::position::attacks::is_attacked_by(pos, g, enemy, None);
        if empty && safe {
            moves.push(Move::castle(king_sq, g, piece, Side::King));
        }
    }

    if rights.queenside(color) {
        let d = Square::from_file_rank(File::D, home);
        let c = Square::from_file_rank(File::C, home);
        let b = Square::from_file_rank(File::B, home);
        let empty = pos.piece_on(d).is_none() && pos.piece_on(c).is_none() && pos.piece_on(b).is_none();
        let safe = !crate::position::attacks::is_attacked_by(pos, king_sq, enemy, None)
            && !crate::position::attacks::is_attacked_by(pos, d, enemy, None)
            && !crate::position::attacks::is_attacked_by(pos, c, enemy, None);
        if empty && safe {
            moves.push(Move::castle(king_sq, c, piece, Side::Queen));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves() {
        let pos = Position::starting_position();
        let mut moves = MoveList::new();
        generate(&pos, &mut moves);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn pawn_on_seventh_rank_promotes_four_ways() {
        let pos = fen::parse("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = MoveList::new();
        generate(&pos, &mut moves);
        let promotions = moves.iter().filter(|m| m.promotion.is_some()).count();
        assert_eq!(promotions, 4);
    }

    #[test]
    fn king_cannot_castle_through_an_attacked_square() {
        // Black rook on f8 attacks f1, which the white king must cross to
        // castle kingside.
        let pos = fen::parse("4k3/5r2/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let mut moves = MoveList::new();
        generate(&pos, &mut moves);
        assert!(!moves.iter().any(|m| m.is_castle()));
    }

    #[test]
    fn king_can_castle_both_ways_from_the_kiwipete_position() {
        let pos = fen::parse("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        let mut moves = MoveList::new();
        generate(&pos, &mut moves);
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).collect();
        assert_eq!(castles.len(), 2);
    }

    #[test]
    fn pawn_on_second_rank_promotes_exactly_four_ways_with_no_plain_move() {
        // Black's c2 pawn must produce c2c1n/b/r/q and never a non-promoting
        // c2c1 — the promotion rank check must fire before the quiet push
        // falls through to a plain move.
        let pos = fen::parse("4k3/2R5/4p2p/P4PpP/8/3bP3/2p2K2/8 b - - 0 62").unwrap();
        let mut moves = MoveList::new();
        generate(&pos, &mut moves);

        let c2_to_c1: Vec<_> = moves
            .iter()
            .filter(|m| m.from.to_string() == "c2" && m.to.to_string() == "c1")
            .collect();
        assert_eq!(c2_to_c1.len(), 4, "expected exactly the four promotion kinds: {c2_to_c1:?}");
        for &kind in &PieceKind::PROMOTION_KINDS {
            assert!(c2_to_c1.iter().any(|m| m.promotion == Some(kind)), "missing promotion to {kind:?}");
        }
        assert!(c2_to_c1.iter().all(|m| m.promotion.is_some()), "no non-promoting c2c1 move should appear");
    }
}
