//! Error taxonomy for the crate's parse boundary (§7: malformed input and
//! illegal positions are returned to the caller; everything past that
//! boundary is a contract the generator itself guarantees).
//!
//! The teacher has no error types at all — `Position::from_fen` panics on
//! anything it doesn't like. `thiserror` is reached for here instead,
//! matching how every other example repo in this pack (e.g. `fiddler`,
//! `ferrite`) reports parse failures.

use thiserror::Error;

/// A FEN string that does not parse (§7, kind 1: malformed input).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 whitespace-separated fields, found {0}")]
    WrongFieldCount(usize),

    #[error("piece placement rank {0} does not sum to 8 files")]
    RankWrongLength(usize),

    #[error("unrecognised piece letter '{0}' in piece placement")]
    UnknownPieceLetter(char),

    #[error("expected 8 ranks in piece placement, found {0}")]
    WrongRankCount(usize),

    #[error("side to move must be 'w' or 'b', found '{0}'")]
    BadSideToMove(String),

    #[error("castling availability field '{0}' is not a subset of KQkq or '-'")]
    BadCastlingRights(String),

    #[error("en-passant target '{0}' is not '-' or a valid square")]
    BadEnPassantSquare(String),

    #[error("half-move clock '{0}' is not a non-negative integer")]
    BadHalfMoveClock(String),

    #[error("full-move number '{0}' is not a positive integer")]
    BadFullMoveNumber(String),
}

/// A position that parses but violates the rules of chess (§7, kind 2).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IllegalPositionError {
    #[error("{0:?} has no king")]
    MissingKing(crate::color::Color),

    #[error("{0:?} has {1} kings, expected exactly 1")]
    WrongKingCount(crate::color::Color, u32),

    #[error("both kings are in check simultaneously")]
    BothKingsInCheck,

    #[error("the side not to move is in check")]
    SideNotToMoveInCheck,

    #[error("a pawn occupies {0}, which is on the first or eighth rank")]
    PawnOnBackRank(crate::square::Square),
}

/// Everything that can go wrong parsing a FEN string into a legal position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error(transparent)]
    Illegal(#[from] IllegalPositionError),
}
