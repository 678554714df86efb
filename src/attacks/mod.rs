//! Attack generation: leapers (C2), sliders (C3) and the ray table (C4).
//!
//! Every table in this tree is either a compile-time `const`/`static` array
//! or a pure function over one, so there is nothing here to initialize at
//! runtime (contrast the teacher's `AttackMasks::init()`, which builds its
//! tables once into a struct the caller constructs and threads through).

pub mod leapers;
pub mod rays;
pub mod sliders;

pub use leapers::{king_attacks, knight_attacks, pawn_attacks, pawn_push1, pawn_push2};
pub use rays::{collinear, ray};
pub use sliders::{bishop_attacks, queen_attacks, rook_attacks};
