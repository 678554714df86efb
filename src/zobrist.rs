//! Zobrist position keys, for repetition detection and (eventually) a
//! transposition table in the search layer.
//!
//! Ground: the teacher's `zobrist.rs`, which also draws its random values
//! from the `rand` crate at program start into a plain struct the caller
//! threads everywhere. Here the table is a single process-wide
//! [`std::sync::LazyLock`] instead of a value passed around by reference —
//! it's generated once, treated as read-only afterwards (spec.md §5), and
//! every `Position` method that needs it reaches `&ZOBRIST` directly rather
//! than taking it as a parameter.

use crate::castling::CastleRights;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::{File, Square};
use rand::Rng;
use std::sync::LazyLock;

pub type Key = u64;

pub struct ZobristKeys {
    piece_square: [[Key; 64]; 12],
    castling: [Key; 16],
    en_passant_file: [Key; 8],
    side_to_move: Key,
}

impl ZobristKeys {
    fn generate() -> ZobristKeys {
        let mut rng = rand::rng();
        let mut piece_square = [[0u64; 64]; 12];
        for piece in piece_square.iter_mut() {
            for sq in piece.iter_mut() {
                *sq = rng.random();
            }
        }
        let mut castling = [0u64; 16];
        for entry in castling.iter_mut() {
            *entry = rng.random();
        }
        let mut en_passant_file = [0u64; 8];
        for entry in en_passant_file.iter_mut() {
            *entry = rng.random();
        }
        ZobristKeys { piece_square, castling, en_passant_file, side_to_move: rng.random() }
    }

    #[inline(always)]
    pub fn piece_square(&self, piece: Piece, square: Square) -> Key {
        self.piece_square[piece.index()][square.index()]
    }

    #[inline(always)]
    pub fn castling(&self, rights: CastleRights) -> Key {
        self.castling[rights.bits() as usize]
    }

    #[inline(always)]
    pub fn en_passant_file(&self, file: File) -> Key {
        self.en_passant_file[file.index()]
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Key {
        self.side_to_move
    }
}

pub static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::generate);

/// Hashes a position from scratch by summing over every occupied square,
/// castling rights, en-passant file and side to move. `Position` itself
/// maintains this incrementally; this is the from-scratch oracle used by
/// `from_fen` and by tests that check the incremental key never drifts.
pub fn hash_from_scratch(
    board: &[Option<Piece>; 64],
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    side_to_move: Color,
) -> Key {
    let mut key = 0;
    for (idx, slot) in board.iter().enumerate() {
        if let Some(piece) = slot {
            key ^= ZOBRIST.piece_square(*piece, Square::new(idx as u8));
        }
    }
    key ^= ZOBRIST.castling(castle_rights);
    if let Some(sq) = en_passant {
        key ^= ZOBRIST.en_passant_file(sq.file());
    }
    if side_to_move == Color::Black {
        key ^= ZOBRIST.side_to_move();
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    #[test]
    fn same_board_hashes_identically() {
        let mut board = [None; 64];
        board[3] = Some(Piece::new(Color::White, PieceKind::King));
        let a = hash_from_scratch(&board, CastleRights::NONE, None, Color::White);
        let b = hash_from_scratch(&board, CastleRights::NONE, None, Color::White);
        assert_eq!(a, b);
    }

    #[test]
    fn side_to_move_changes_the_key() {
        let board = [None; 64];
        let white = hash_from_scratch(&board, CastleRights::NONE, None, Color::White);
        let black = hash_from_scratch(&board, CastleRights::NONE, None, Color::Black);
        assert_ne!(white, black);
    }
}
