//! Castling rights: a packed 4-bit flag set (spec.md §4.1 fixes the exact
//! bit values), wrapped here the way the teacher wraps its own `CastleRights`
//! newtype in `pos.rs` — except the teacher's bit values (`WK=0x2, WQ=0x4,
//! BK=0x8, QK=0x10`) differ from the ones this crate is required to use, so
//! the constants come from [`crate::bitboard`] instead of being redefined.

use crate::bitboard::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::color::Color;
use std::fmt;

/// Which rook a castling move brings across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    King,
    Queen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(CASTLE_WK | CASTLE_WQ | CASTLE_BK | CASTLE_BQ);

    #[inline(always)]
    pub const fn from_bits(bits: u8) -> CastleRights {
        CastleRights(bits & (CASTLE_WK | CASTLE_WQ | CASTLE_BK | CASTLE_BQ))
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn kingside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => CASTLE_WK,
            Color::Black => CASTLE_BK,
        };
        self.0 & flag != 0
    }

    #[inline(always)]
    pub const fn queenside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => CASTLE_WQ,
            Color::Black => CASTLE_BQ,
        };
        self.0 & flag != 0
    }

    #[inline(always)]
    pub const fn has(self, color: Color, side: Side) -> bool {
        match side {
            Side::King => self.kingside(color),
            Side::Queen => self.queenside(color),
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn without_kingside(self, color: Color) -> CastleRights {
        let flag = match color {
            Color::White => CASTLE_WK,
            Color::Black => CASTLE_BK,
        };
        CastleRights(self.0 & !flag)
    }

    #[inline(always)]
    #[must_use]
    pub const fn without_queenside(self, color: Color) -> CastleRights {
        let flag = match color {
            Color::White => CASTLE_WQ,
            Color::Black => CASTLE_BQ,
        };
        CastleRights(self.0 & !flag)
    }

    /// Clears both of `color`'s rights, e.g. once its king has moved.
    #[inline(always)]
    #[must_use]
    pub const fn without_color(self, color: Color) -> CastleRights {
        self.without_kingside(color).without_queenside(color)
    }

    /// Drops whichever right corresponds to a rook standing on `square`
    /// being captured or moved, identified by its starting square. No-op if
    /// `square` isn't a rook's home square.
    #[must_use]
    pub fn without_rook_on(self, square: crate::square::Square) -> CastleRights {
        match square.to_string().as_str() {
            "h1" => self.without_kingside(Color::White),
            "a1" => self.without_queenside(Color::White),
            "h8" => self.without_kingside(Color::Black),
            "a8" => self.without_queenside(Color::Black),
            _ => self,
        }
    }

    pub fn to_fen_field(self) -> String {
        if self == CastleRights::NONE {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        if self.kingside(Color::White) {
            s.push('K');
        }
        if self.queenside(Color::White) {
            s.push('Q');
        }
        if self.kingside(Color::Black) {
            s.push('k');
        }
        if self.queenside(Color::Black) {
            s.push('q');
        }
        s
    }

    pub fn from_fen_field(field: &str) -> CastleRights {
        if field == "-" {
            return CastleRights::NONE;
        }
        let mut bits = 0u8;
        for ch in field.chars() {
            bits |= match ch {
                'K' => CASTLE_WK,
                'Q' => CASTLE_WQ,
                'k' => CASTLE_BK,
                'q' => CASTLE_BQ,
                _ => 0,
            };
        }
        CastleRights::from_bits(bits)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn fen_field_roundtrip() {
        for field in ["-", "K", "Qk", "KQkq", "kq"] {
            assert_eq!(CastleRights::from_fen_field(field).to_fen_field(), field);
        }
    }

    #[test]
    fn losing_a_rook_drops_only_that_side() {
        let rights = CastleRights::ALL.without_rook_on(Square::from_algebraic("a1").unwrap());
        assert!(!rights.queenside(Color::White));
        assert!(rights.kingside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));
    }

    #[test]
    fn moving_the_king_drops_both_sides() {
        let rights = CastleRights::ALL.without_color(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(!rights.queenside(Color::White));
    }
}
