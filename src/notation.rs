//! Long-algebraic (UCI-like) move text, per spec.md §6: source square,
//! target square, and for promotions a lowercase promotion letter from
//! `{n, b, r, q}`. Castling is just the king's two-square move; en passant
//! is just the capturing pawn's diagonal move.
//!
//! Grounded on the teacher's `Move::to_uci_fmt` / `Move::from_str_move`,
//! rewritten against the new [`crate::moves::Move`] shape — which already
//! carries `capture`/`promotion`/`flag`, so decoding no longer needs to
//! peek at the board to classify the move the way the teacher's
//! `from_str_move` does.

use crate::moves::Move;
use crate::piece::PieceKind;
use crate::square::Square;

/// Renders a move the way a UCI-speaking engine would: `e2e4`, `e7e8q`.
pub fn to_long_algebraic(m: &Move) -> String {
    let mut s = format!("{}{}", m.from, m.to);
    if let Some(kind) = m.promotion {
        s.push(match kind {
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            _ => unreachable!("pawns never promote to a pawn or king"),
        });
    }
    s
}

/// Parses the source/target/promotion triple out of a long-algebraic move
/// string. This alone can't rebuild a full [`Move`] (it doesn't know the
/// moving piece, whether it's a capture, or whether it's secretly a castle
/// or en passant) — callers match the result against the position's legal
/// move list, which is how every UCI-speaking consumer is expected to use
/// this encoding in the first place (spec.md §7, kind 3).
pub fn parse_long_algebraic(text: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if text.len() < 4 || text.len() > 5 {
        return None;
    }
    let from = Square::from_algebraic(&text[0..2])?;
    let to = Square::from_algebraic(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'n') => Some(PieceKind::Knight),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'q') => Some(PieceKind::Queen),
        Some(_) => return None,
    };
    Some((from, to, promotion))
}

/// Finds the legal move matching a long-algebraic string against a move
/// list already produced by the generator (the only place legality can be
/// authoritatively decided, per spec.md §7).
pub fn resolve<'a>(text: &str, legal_moves: &'a [Move]) -> Option<&'a Move> {
    let (from, to, promotion) = parse_long_algebraic(text)?;
    legal_moves
        .iter()
        .find(|m| m.from == from && m.to == to && m.promotion == promotion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::piece::Piece;

    #[test]
    fn quiet_move_round_trips() {
        let from = Square::from_algebraic("e2").unwrap();
        let to = Square::from_algebraic("e4").unwrap();
        let m = Move::double_push(from, to, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(to_long_algebraic(&m), "e2e4");
        assert_eq!(parse_long_algebraic("e2e4"), Some((from, to, None)));
    }

    #[test]
    fn promotion_move_carries_lowercase_letter() {
        let from = Square::from_algebraic("c2").unwrap();
        let to = Square::from_algebraic("c1").unwrap();
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let m = Move::promotion(from, to, pawn, PieceKind::Queen);
        assert_eq!(to_long_algebraic(&m), "c2c1q");
        assert_eq!(
            parse_long_algebraic("c2c1q"),
            Some((from, to, Some(PieceKind::Queen)))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_long_algebraic("z9z9"), None);
        assert_eq!(parse_long_algebraic("e2"), None);
    }
}
