//! Static evaluation: the "external collaborator" spec.md §1/§6 describes
//! abstractly. This is a small, standard material + piece-square-table
//! evaluator — enough to give `search` and the `perft` binary's `play`
//! mode something concrete to call, not a tuned engine.
//!
//! Ground: none of the teacher's own code (it has no evaluator at all);
//! the `Evaluator` trait boundary and phase-interpolated PST shape follow
//! `claytonwramsey-fiddler`'s evaluation module in this pack, restated
//! against this crate's tagged `Piece`/`Color` types.

use crate::bitboard::BitboardExt;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::position::Position;

/// A pluggable static evaluator. Positive scores favour white, following
/// spec.md §6.
pub trait Evaluator {
    fn evaluate(&self, pos: &Position) -> i32;
}

const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => 0,
    }
}

/// Game-phase weight per piece kind, used to interpolate between the
/// middlegame and endgame piece-square tables (spec.md §6: "a
/// material-based game-phase scalar in [0,1]"). Kings and pawns don't
/// count toward phase.
const fn phase_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Knight | PieceKind::Bishop => 1,
        PieceKind::Rook => 2,
        PieceKind::Queen => 4,
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

const TOTAL_PHASE: i32 = 4 * phase_weight(PieceKind::Knight)
    + 4 * phase_weight(PieceKind::Bishop)
    + 4 * phase_weight(PieceKind::Rook)
    + 2 * phase_weight(PieceKind::Queen);

/// White's-perspective piece-square tables, indexed by `Square::index()`
/// directly — since index 0 is h1 and increases file-decreasing then
/// rank-increasing under this crate's mirrored numbering, each table row
/// below is written h-file-to-a-file, rank 1 to rank 8, matching how a
/// reader would scan the board mentally as "rank 1 right-to-left, then
/// rank 2 right-to-left, ...".
#[rustfmt::skip]
const PAWN_MG: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const PAWN_EG: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     10,  10,  10,  10,  10,  10,  10,  10,
     10,  10,  10,  10,  10,  10,  10,  10,
     20,  20,  20,  20,  20,  20,  20,  20,
     30,  30,  30,  30,  30,  30,  30,  30,
     50,  50,  50,  50,  50,  50,  50,  50,
     80,  80,  80,  80,  80,  80,  80,  80,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_MG: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_MG: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_MG: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_MG: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MG: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

#[rustfmt::skip]
const KING_EG: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -50, -40, -30, -20, -20, -30, -40, -50,
];

/// Looks up `table[idx]` as seen from `color`'s side of the board — black's
/// tables are white's mirrored rank-for-rank (rank 1 <-> rank 8), since all
/// the constant tables above are written from white's perspective.
fn pst_value(table: &[i32; 64], color: Color, index: usize) -> i32 {
    match color {
        Color::White => table[index],
        Color::Black => table[index ^ 0b111000],
    }
}

/// Material plus phase-interpolated piece-square tables. The only concrete
/// [`Evaluator`] this crate ships — standard and deliberately unambitious,
/// per spec.md §1's framing of evaluation as "standard and uninteresting
/// compared to the bitboard core".
pub struct Material;

impl Evaluator for Material {
    fn evaluate(&self, pos: &Position) -> i32 {
        let mut phase = TOTAL_PHASE;
        let mut mg = 0i32;
        let mut eg = 0i32;

        for color in Color::ALL {
            let sign = match color {
                Color::White => 1,
                Color::Black => -1,
            };
            for kind in PieceKind::ALL {
                let (table_mg, table_eg): (&[i32; 64], &[i32; 64]) = match kind {
                    PieceKind::Pawn => (&PAWN_MG, &PAWN_EG),
                    PieceKind::Knight => (&KNIGHT_MG, &KNIGHT_MG),
                    PieceKind::Bishop => (&BISHOP_MG, &BISHOP_MG),
                    PieceKind::Rook => (&ROOK_MG, &ROOK_MG),
                    PieceKind::Queen => (&QUEEN_MG, &QUEEN_MG),
                    PieceKind::King => (&KING_MG, &KING_EG),
                };
                for square in pos.pieces_of_kind(color, kind).squares() {
                    mg += sign * (piece_value(kind) + pst_value(table_mg, color, square.index()));
                    eg += sign * (piece_value(kind) + pst_value(table_eg, color, square.index()));
                    phase -= phase_weight(kind);
                }
            }
        }

        let phase = phase.clamp(0, TOTAL_PHASE);
        (mg * phase + eg * (TOTAL_PHASE - phase)) / TOTAL_PHASE.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_materially_balanced() {
        let pos = Position::starting_position();
        assert_eq!(Material.evaluate(&pos), 0);
    }

    #[test]
    fn an_extra_queen_favours_its_side() {
        let pos = crate::fen::parse("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert!(Material.evaluate(&pos) > QUEEN_VALUE);
    }

    #[test]
    fn black_material_is_negative() {
        let pos = crate::fen::parse("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(Material.evaluate(&pos) < -QUEEN_VALUE);
    }
}
