//! A bitboard legal move generator for chess: hyperbola-quintessence
//! sliding attacks, an explicit check-mask/pin-map architecture, and
//! minimal-undo-info make/unmake, together with the position state and FEN
//! plumbing it depends on. Static evaluation and search are included as
//! small, deliberately unambitious collaborators (spec.md §1/§6) — the
//! bitboard core is the point of this crate.
//!
//! Ground: `irrelevantpiadina-libchess`'s module layout (one file per
//! concern, re-exported flat from the crate root) — see each module's own
//! doc comment for what it's grounded on specifically.

pub mod attacks;
pub mod bitboard;
pub mod castling;
pub mod color;
pub mod error;
pub mod eval;
pub mod fen;
pub mod logging;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod piece;
pub mod position;
pub mod search;
pub mod square;
pub mod zobrist;

pub use castling::{CastleRights, Side};
pub use color::Color;
pub use error::{FenError, IllegalPositionError, PositionError};
pub use moves::{Move, MoveFlag, MoveList};
pub use piece::{Piece, PieceKind};
pub use position::Position;
pub use square::{File, Rank, Square};
