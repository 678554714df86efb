//! Make / unmake move (C10), per spec.md §4.7.
//!
//! Ground: the teacher's `Position::make_move` / `unmake_move`, which push
//! a full `StateInfo` snapshot per ply and restore it wholesale on unmake.
//! This instead follows spec.md §9's minimal-undo-info alternative — only
//! what can't be recovered by running the move backwards goes into
//! [`super::Undo`] — while keeping the teacher's order of operations
//! (clock and rights bookkeeping, then the piece-placement edits, then the
//! special-move branch, then flip the side to move).

use super::{Position, Undo};
use crate::castling::Side;
use crate::color::Color;
use crate::moves::{Move, MoveFlag};
use crate::piece::{Piece, PieceKind};
use crate::square::{Rank, Square};
use crate::zobrist::ZOBRIST;

impl Position {
    /// Plays `mv`, pushing enough undo information onto the history stack
    /// to reverse it with [`Position::unmake_move`]. Does not check
    /// legality — callers only ever pass moves produced by the generator
    /// (spec.md §7, kind 3).
    pub fn make_move(&mut self, mv: Move) {
        self.history.push(Undo {
            mv,
            castle_rights: self.castle_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            check_mask: self.check_mask,
            pins: self.pins,
            key: self.key,
        });

        let moving_color = mv.piece.color;

        if let Some(ep) = self.en_passant.take() {
            self.key ^= ZOBRIST.en_passant_file(ep.file());
        }

        self.halfmove_clock = if mv.is_capture() || mv.piece.kind == PieceKind::Pawn {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.key ^= ZOBRIST.castling(self.castle_rights);
        if mv.piece.kind == PieceKind::King {
            self.castle_rights = self.castle_rights.without_color(moving_color);
        } else if mv.piece.kind == PieceKind::Rook {
            self.castle_rights = self.castle_rights.without_rook_on(mv.from);
        }
        if let Some(captured_sq) = mv.captured_square() {
            self.castle_rights = self.castle_rights.without_rook_on(captured_sq);
        }
        self.key ^= ZOBRIST.castling(self.castle_rights);

        if let Some(captured_sq) = mv.captured_square() {
            let captured = self.remove_piece(captured_sq);
            self.key ^= ZOBRIST.piece_square(captured, captured_sq);
        }

        self.remove_piece(mv.from);
        self.key ^= ZOBRIST.piece_square(mv.piece, mv.from);

        let placed = match mv.promotion {
            Some(kind) => Piece::new(moving_color, kind),
            None => mv.piece,
        };
        self.put_piece(placed, mv.to);
        self.key ^= ZOBRIST.piece_square(placed, mv.to);

        if let MoveFlag::Castle(side) = mv.flag {
            let (rook_from, rook_to) = castle_rook_squares(moving_color, side);
            let rook = self.remove_piece(rook_from);
            self.key ^= ZOBRIST.piece_square(rook, rook_from);
            self.put_piece(rook, rook_to);
            self.key ^= ZOBRIST.piece_square(rook, rook_to);
        }

        if mv.flag == MoveFlag::DoublePush {
            let skipped = mv.from.offset(forward(moving_color)).expect("double push stays on board");
            self.en_passant = Some(skipped);
            self.key ^= ZOBRIST.en_passant_file(skipped.file());
        }

        if moving_color == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = !self.side_to_move;
        self.key ^= ZOBRIST.side_to_move();

        self.game_update();
    }

    /// Undoes the last move played. Panics (debug and release both, same
    /// as the teacher) if there is no move to unmake.
    pub fn unmake_move(&mut self) {
        let undo = self.history.pop().expect("tried to unmake a move on a position with no history");
        let mv = undo.mv;
        let moving_color = mv.piece.color;

        self.side_to_move = moving_color;
        if moving_color == Color::Black {
            self.fullmove_number -= 1;
        }

        if let MoveFlag::Castle(side) = mv.flag {
            let (rook_from, rook_to) = castle_rook_squares(moving_color, side);
            let rook = self.remove_piece(rook_to);
            self.put_piece(rook, rook_from);
        }

        self.remove_piece(mv.to);
        self.put_piece(mv.piece, mv.from);

        if let Some(captured_sq) = mv.captured_square() {
            let captured = mv.capture.expect("a move with a captured square always names the captured piece");
            self.put_piece(captured, captured_sq);
        }

        self.castle_rights = undo.castle_rights;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.check_mask = undo.check_mask;
        self.pins = undo.pins;
        self.key = undo.key;
    }
}

#[inline(always)]
const fn forward(color: Color) -> i32 {
    match color {
        Color::White => 8,
        Color::Black => -8,
    }
}

fn castle_rook_squares(color: Color, side: Side) -> (Square, Square) {
    use crate::square::File;
    let rank = match color {
        Color::White => Rank::One,
        Color::Black => Rank::Eight,
    };
    match side {
        Side::King => (Square::from_file_rank(File::H, rank), Square::from_file_rank(File::F, rank)),
        Side::Queen => (Square::from_file_rank(File::A, rank), Square::from_file_rank(File::D, rank)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen;

    #[test]
    fn make_then_unmake_restores_the_position_exactly() {
        let mut pos = fen::parse(fen::START_FEN).unwrap();
        let before = fen::render(&pos);
        let e2 = Square::from_algebraic("e2").unwrap();
        let e4 = Square::from_algebraic("e4").unwrap();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        pos.make_move(Move::double_push(e2, e4, pawn));
        assert_ne!(fen::render(&pos), before);
        pos.unmake_move();
        assert_eq!(fen::render(&pos), before);
    }

    #[test]
    fn double_push_sets_en_passant_target_behind_the_pawn() {
        let mut pos = fen::parse(fen::START_FEN).unwrap();
        let e2 = Square::from_algebraic("e2").unwrap();
        let e4 = Square::from_algebraic("e4").unwrap();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        pos.make_move(Move::double_push(e2, e4, pawn));
        assert_eq!(pos.en_passant_target(), Some(Square::from_algebraic("e3").unwrap()));
    }

    #[test]
    fn castling_moves_both_king_and_rook() {
        let mut pos = fen::parse("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let e1 = Square::from_algebraic("e1").unwrap();
        let g1 = Square::from_algebraic("g1").unwrap();
        let king = Piece::new(Color::White, PieceKind::King);
        pos.make_move(Move::castle(e1, g1, king, Side::King));
        assert_eq!(pos.piece_on(g1), Some(king));
        let f1 = Square::from_algebraic("f1").unwrap();
        assert_eq!(pos.piece_on(f1), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert!(!pos.castle_rights().kingside(Color::White));
    }

    #[test]
    fn capturing_a_home_square_rook_clears_that_right() {
        let mut pos = fen::parse("4k2r/8/8/8/8/8/8/4K2Q w kq - 0 1").unwrap();
        let h1 = Square::from_algebraic("h1").unwrap();
        let h8 = Square::from_algebraic("h8").unwrap();
        let queen = Piece::new(Color::White, PieceKind::Queen);
        let rook = Piece::new(Color::Black, PieceKind::Rook);
        pos.make_move(Move::capture(h1, h8, queen, rook));
        assert!(!pos.castle_rights().kingside(Color::Black));
    }
}
