//! A single move (§3: "side, source square index, target square index,
//! piece kind, capture flag, castle flag, promotion, en-passant flag").
//!
//! The teacher's `MoveType` enum folds the captured piece and the
//! promotion piece into the variant itself (`PromoCapture(Piece, Piece)`),
//! which works but means every match arm that only cares "is this a
//! capture" has to enumerate four variants. Here capture and promotion are
//! plain `Option` fields alongside a small flag for the handful of move
//! shapes that need special make/unmake handling (double push, castling,
//! en passant), following the flatter `Move` shape used by `fiddler` and
//! `barnarok` in this pack.

use crate::castling::Side;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use arrayvec::ArrayVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Quiet,
    DoublePush,
    Castle(Side),
    EnPassant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub capture: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub flag: MoveFlag,
}

impl Move {
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Move {
        Move { from, to, piece, capture: None, promotion: None, flag: MoveFlag::Quiet }
    }

    pub const fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Move {
        Move { from, to, piece, capture: Some(captured), promotion: None, flag: MoveFlag::Quiet }
    }

    pub const fn double_push(from: Square, to: Square, piece: Piece) -> Move {
        Move { from, to, piece, capture: None, promotion: None, flag: MoveFlag::DoublePush }
    }

    pub const fn en_passant(from: Square, to: Square, piece: Piece, captured: Piece) -> Move {
        Move { from, to, piece, capture: Some(captured), promotion: None, flag: MoveFlag::EnPassant }
    }

    pub const fn castle(from: Square, to: Square, piece: Piece, side: Side) -> Move {
        Move { from, to, piece, capture: None, promotion: None, flag: MoveFlag::Castle(side) }
    }

    pub const fn promotion(from: Square, to: Square, piece: Piece, kind: PieceKind) -> Move {
        Move { from, to, piece, capture: None, promotion: Some(kind), flag: MoveFlag::Quiet }
    }

    pub const fn promo_capture(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Piece,
        kind: PieceKind,
    ) -> Move {
        Move { from, to, piece, capture: Some(captured), promotion: Some(kind), flag: MoveFlag::Quiet }
    }

    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        matches!(self.flag, MoveFlag::Castle(_))
    }

    /// The square the captured piece actually sits on. Equal to `to`
    /// except for en passant, where the captured pawn is one rank behind
    /// the target square from the capturing side's perspective.
    pub fn captured_square(&self) -> Option<Square> {
        if self.capture.is_none() {
            return None;
        }
        if self.flag == MoveFlag::EnPassant {
            let behind = match self.piece.color {
                crate::color::Color::White => -8,
                crate::color::Color::Black => 8,
            };
            self.to.offset(behind)
        } else {
            Some(self.to)
        }
    }
}

/// A fixed-capacity move buffer. 218 is the maximum number of legal moves
/// ever reachable in a legal chess position (spec.md's own over-estimate,
/// 238, is the teacher's comment for the same bound using a heap `Vec`
/// instead; `arrayvec` avoids the allocation per call, grounded on
/// `leesamuel423-ferrite`'s move lists in this pack).
pub type MoveList = ArrayVec<Move, 218>;
