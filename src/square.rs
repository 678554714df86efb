//! Square indexing.
//!
//! Squares are numbered 0..64 in the mapping spec.md fixes: file h rank 1 is
//! square 0, file a rank 1 is square 7, file h rank 8 is square 56, file a
//! rank 8 is square 63. Equivalently `square = rank * 8 + (7 - file)` with
//! `file` 0=a..7=h and `rank` 0=rank-1..7=rank-8. This is the mirror image
//! of the usual a1=0 little-endian-rank-file convention: within one rank,
//! the square index *decreases* as the file letter increases, so "east"
//! (towards the h-file) is `index - 1`, not `index + 1`.

use std::fmt;

/// A file, a..h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(i: usize) -> Option<File> {
        if i < 8 { Some(Self::ALL[i]) } else { None }
    }

    pub const fn from_char(ch: char) -> Option<File> {
        match ch {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        (b'a' + self.index() as u8) as char
    }
}

/// A rank, 1..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(i: usize) -> Option<Rank> {
        if i < 8 { Some(Self::ALL[i]) } else { None }
    }

    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1' => Some(Rank::One),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        (b'1' + self.index() as u8) as char
    }
}

/// A square index, 0..64. See the module docs for the (mirrored) mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Builds a square from a raw index. Panics (debug-only, per spec.md
    /// §7's "internal invariant breach" kind) if `idx >= 64`.
    #[inline(always)]
    pub const fn new(idx: u8) -> Square {
        debug_assert!(idx < 64, "square index out of bounds");
        Square(idx)
    }

    #[inline(always)]
    pub const fn from_file_rank(file: File, rank: Rank) -> Square {
        Square((rank.index() * 8 + (7 - file.index())) as u8)
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn file(self) -> File {
        File::ALL[7 - (self.0 as usize % 8)]
    }

    #[inline(always)]
    pub const fn rank(self) -> Rank {
        Rank::ALL[self.0 as usize / 8]
    }

    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::from_file_rank(file, rank))
    }

    pub const ALL_INDICES: std::ops::Range<u8> = 0..64;

    /// `self` shifted by `delta` raw index steps (north/south is always ±8
    /// regardless of the mirrored file numbering — see the module docs).
    /// `None` if the result would fall off the board.
    #[inline(always)]
    pub const fn offset(self, delta: i32) -> Option<Square> {
        let idx = self.0 as i32 + delta;
        if idx < 0 || idx > 63 { None } else { Some(Square::new(idx as u8)) }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_match_spec() {
        assert_eq!(Square::from_algebraic("h1").unwrap().index(), 0);
        assert_eq!(Square::from_algebraic("a1").unwrap().index(), 7);
        assert_eq!(Square::from_algebraic("h8").unwrap().index(), 56);
        assert_eq!(Square::from_algebraic("a8").unwrap().index(), 63);
    }

    #[test]
    fn file_rank_roundtrip() {
        for idx in Square::ALL_INDICES {
            let sq = Square::new(idx);
            assert_eq!(Square::from_file_rank(sq.file(), sq.rank()), sq);
        }
    }

    #[test]
    fn algebraic_roundtrip() {
        for idx in Square::ALL_INDICES {
            let sq = Square::new(idx);
            let text = sq.to_string();
            assert_eq!(Square::from_algebraic(&text), Some(sq));
        }
    }
}
