//! Position state (C5): twelve piece boards, side to move, castling
//! rights, en-passant target, clocks, derived occupancies, cached pins and
//! check masks, and a history stack for unmake.
//!
//! Ground: the teacher's `pos::Position` / `StateInfo` split (current
//! state plus a `Vec<StateInfo>` of everything before it). The state
//! carried per history entry is trimmed down to the minimal-undo-info
//! shape spec.md §9 calls out as an acceptable alternative to full
//! snapshots — see [`Undo`] and `make_move.rs`.

pub mod attacks;
pub mod checks;
pub mod make_move;

use crate::bitboard::{bit, Bitboard, NO_BITS};
use crate::castling::CastleRights;
use crate::color::Color;
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::zobrist::Key;
use arrayvec::ArrayVec;

/// The check-mask sentinel from spec.md §4.3 / §4.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMask {
    /// Not in check; no constraint on non-king moves.
    All,
    /// In check from exactly one piece; non-king moves must land on a bit
    /// set in this mask (capture the checker or interpose).
    Mask(Bitboard),
    /// In check from two or more pieces; only king moves are legal.
    Double,
}

impl CheckMask {
    /// `Mask`'s bits, `AllBits` for `All`, or `0` for `Double` (callers
    /// branch on `Double` before ever intersecting against it).
    #[inline(always)]
    pub const fn bits(self) -> Bitboard {
        match self {
            CheckMask::All => crate::bitboard::ALL_BITS,
            CheckMask::Mask(m) => m,
            CheckMask::Double => NO_BITS,
        }
    }
}

/// The pin map (§4.3): each pinned friendly piece's single-bit bitboard to
/// the ray it's confined to. At most 8 pins can exist at once (one per
/// compass direction from the king), so this is a flat association list
/// rather than a hash map.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pins(ArrayVec<(Bitboard, Bitboard), 8>);

impl Pins {
    fn new() -> Pins {
        Pins(ArrayVec::new())
    }

    fn push(&mut self, piece_bit: Bitboard, ray: Bitboard) {
        self.0.push((piece_bit, ray));
    }

    /// The ray a pinned piece (identified by its single-bit bitboard) is
    /// confined to, if it's pinned at all.
    #[inline(always)]
    pub fn ray_of(&self, piece_bit: Bitboard) -> Option<Bitboard> {
        self.0.iter().find(|(bit, _)| *bit == piece_bit).map(|(_, ray)| *ray)
    }

    #[inline(always)]
    pub fn is_pinned(&self, piece_bit: Bitboard) -> bool {
        self.ray_of(piece_bit).is_some()
    }
}

/// Minimal undo information for one ply (spec.md §9's "acceptable
/// alternative" to full-position snapshots): everything [`make_move`]
/// can't cheaply recompute by running itself in reverse.
#[derive(Debug, Clone)]
pub(crate) struct Undo {
    pub(crate) mv: Move,
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) check_mask: [CheckMask; 2],
    pub(crate) pins: [Pins; 2],
    pub(crate) key: Key,
}

#[derive(Debug, Clone)]
pub struct Position {
    pub(crate) piece_bb: [Bitboard; 12],
    pub(crate) color_bb: [Bitboard; 2],
    pub(crate) board: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) check_mask: [CheckMask; 2],
    pub(crate) pins: [Pins; 2],
    pub(crate) key: Key,
    pub(crate) history: Vec<Undo>,
}

impl Position {
    pub(crate) fn empty() -> Position {
        Position {
            piece_bb: [NO_BITS; 12],
            color_bb: [NO_BITS; 2],
            board: [None; 64],
            side_to_move: Color::White,
            castle_rights: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            check_mask: [CheckMask::All; 2],
            pins: [Pins::new(); 2],
            key: 0,
            history: Vec::with_capacity(128),
        }
    }

    pub fn starting_position() -> Position {
        crate::fen::parse(crate::fen::START_FEN).expect("the starting FEN is well-formed")
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline(always)]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline(always)]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline(always)]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline(always)]
    pub fn key(&self) -> Key {
        self.key
    }

    #[inline(always)]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    #[inline(always)]
    pub fn piece_bb(&self, piece: Piece) -> Bitboard {
        self.piece_bb[piece.index()]
    }

    #[inline(always)]
    pub fn pieces_of_kind(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.piece_bb[Piece::new(color, kind).index()]
    }

    #[inline(always)]
    pub fn color_bb(&self, color: Color) -> Bitboard {
        self.color_bb[color.index()]
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.color_bb[0] | self.color_bb[1]
    }

    #[inline(always)]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Square {
        crate::bitboard::square_of(self.pieces_of_kind(color, PieceKind::King))
    }

    #[inline(always)]
    pub fn check_mask(&self, color: Color) -> CheckMask {
        self.check_mask[color.index()]
    }

    #[inline(always)]
    pub fn pins(&self, color: Color) -> &Pins {
        &self.pins[color.index()]
    }

    #[inline(always)]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.check_mask[color.index()] != CheckMask::All
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether the current position has occurred at least three times
    /// among `self` and its history, counting only as far back as the
    /// most recent irreversible move (capture, pawn move, castle, or loss
    /// of castling/en-passant rights breaks the chain, same as the
    /// teacher's `is_3_rep`).
    pub fn is_threefold_repetition(&self) -> bool {
        let mut seen = 1;
        for undo in self.history.iter().rev() {
            if !is_reversible(&undo.mv) {
                break;
            }
            if undo.key == self.key {
                seen += 1;
                if seen >= 3 {
                    return true;
                }
            }
        }
        false
    }

    pub(crate) fn put_piece(&mut self, piece: Piece, square: Square) {
        debug_assert!(self.board[square.index()].is_none(), "square already occupied");
        self.board[square.index()] = Some(piece);
        self.piece_bb[piece.index()] |= bit(square);
        self.color_bb[piece.color.index()] |= bit(square);
    }

    pub(crate) fn remove_piece(&mut self, square: Square) -> Piece {
        let piece = self.board[square.index()].take().expect("square is occupied");
        self.piece_bb[piece.index()] &= !bit(square);
        self.color_bb[piece.color.index()] &= !bit(square);
        piece
    }

    /// Recomputes `check_mask` and `pins` for both sides, and the Zobrist
    /// key from scratch's structural fields (incremental key maintenance
    /// happens in `make_move`, not here). Spec.md §4: "every mutation ends
    /// with a `GameUpdate` pass that recomputes `Pins`, `CheckMaskW`,
    /// `CheckMaskB`".
    pub(crate) fn game_update(&mut self) {
        for &color in &Color::ALL {
            let (mask, pins) = checks::compute(self, color);
            self.check_mask[color.index()] = mask;
            self.pins[color.index()] = pins;
        }
    }
}

fn is_reversible(mv: &Move) -> bool {
    !mv.is_capture() && mv.piece.kind != PieceKind::Pawn && !mv.is_castle()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_one_king_per_side() {
        let pos = Position::starting_position();
        assert_eq!(crate::bitboard::pop_count(pos.pieces_of_kind(Color::White, PieceKind::King)), 1);
        assert_eq!(crate::bitboard::pop_count(pos.pieces_of_kind(Color::Black, PieceKind::King)), 1);
    }

    #[test]
    fn occupancy_is_consistent_at_the_start() {
        let pos = Position::starting_position();
        let white_union = PieceKind::ALL
            .iter()
            .fold(NO_BITS, |acc, &k| acc | pos.pieces_of_kind(Color::White, k));
        assert_eq!(white_union, pos.color_bb(Color::White));
        assert_eq!(pos.color_bb(Color::White) & pos.color_bb(Color::Black), NO_BITS);
        assert_eq!(pos.occupied(), pos.color_bb(Color::White) | pos.color_bb(Color::Black));
    }

    #[test]
    fn starting_position_is_not_in_check() {
        let pos = Position::starting_position();
        assert!(!pos.is_in_check(Color::White));
        assert!(!pos.is_in_check(Color::Black));
    }
}
