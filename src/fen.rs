//! FEN parse / render (C11), per spec.md §4.8.
//!
//! Ground: the teacher's `Position::from_fen`, which walks the string by
//! hand with a running `str_idx` and panics on anything unexpected. This
//! keeps the hand-rolled-scanner shape (no regex, no parser-combinator
//! crate — none of the pack's five teachers reach for one to parse FEN)
//! but turns every panic site into a [`FenError`] variant, and adds the
//! illegal-position checks spec.md §7 calls out as a distinct failure
//! kind.

use crate::castling::CastleRights;
use crate::color::Color;
use crate::error::{FenError, IllegalPositionError, PositionError};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::{File, Rank, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses `text` into a [`Position`], logging (at `warn`) and returning an
/// error for anything malformed or illegal rather than panicking.
pub fn parse(text: &str) -> Result<Position, PositionError> {
    parse_inner(text).inspect_err(|err| log::warn!("rejecting FEN {text:?}: {err}"))
}

fn parse_inner(text: &str) -> Result<Position, PositionError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount(fields.len()).into());
    }
    let (placement, side, castling, en_passant, halfmove, fullmove) =
        (fields[0], fields[1], fields[2], fields[3], fields[4], fields[5]);

    let mut pos = Position::empty();
    parse_placement(placement, &mut pos)?;

    pos.side_to_move = match side {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::BadSideToMove(other.to_string()).into()),
    };

    if castling != "-" && !castling.chars().all(|c| "KQkq".contains(c)) {
        return Err(FenError::BadCastlingRights(castling.to_string()).into());
    }
    pos.castle_rights = CastleRights::from_fen_field(castling);

    pos.en_passant = match en_passant {
        "-" => None,
        square => Some(
            Square::from_algebraic(square).ok_or_else(|| FenError::BadEnPassantSquare(square.to_string()))?,
        ),
    };

    pos.halfmove_clock = halfmove
        .parse()
        .map_err(|_| FenError::BadHalfMoveClock(halfmove.to_string()))?;

    pos.fullmove_number = fullmove
        .parse()
        .map_err(|_| FenError::BadFullMoveNumber(fullmove.to_string()))?;
    if pos.fullmove_number == 0 {
        return Err(FenError::BadFullMoveNumber(fullmove.to_string()).into());
    }

    validate_material(&pos)?;

    pos.key = crate::zobrist::hash_from_scratch(&pos.board, pos.castle_rights, pos.en_passant, pos.side_to_move);
    pos.game_update();

    validate_check_state(&pos)?;

    Ok(pos)
}

/// King-count and pawn-placement checks, done before [`Position::game_update`]
/// runs — that pass assumes exactly one king per side, so a position
/// missing one must be rejected first rather than tripping an internal
/// invariant inside check-mask computation.
fn validate_material(pos: &Position) -> Result<(), IllegalPositionError> {
    for color in Color::ALL {
        let count = crate::bitboard::pop_count(pos.pieces_of_kind(color, PieceKind::King));
        match count {
            0 => return Err(IllegalPositionError::MissingKing(color)),
            1 => {}
            n => return Err(IllegalPositionError::WrongKingCount(color, n)),
        }
    }

    for idx in Square::ALL_INDICES {
        let sq = Square::new(idx);
        if let Some(piece) = pos.piece_on(sq) {
            if piece.kind == PieceKind::Pawn && matches!(sq.rank(), Rank::One | Rank::Eight) {
                return Err(IllegalPositionError::PawnOnBackRank(sq));
            }
        }
    }

    Ok(())
}

fn parse_placement(placement: &str, pos: &mut Position) -> Result<(), FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRankCount(rows.len()));
    }
    for (row_idx, row) in rows.iter().enumerate() {
        let rank = Rank::from_index(7 - row_idx).expect("row_idx < 8");
        let mut file_idx = 0usize;
        for ch in row.chars() {
            if let Some(run) = ch.to_digit(10) {
                file_idx += run as usize;
            } else {
                let piece = Piece::from_fen_char(ch).ok_or(FenError::UnknownPieceLetter(ch))?;
                let file = File::from_index(file_idx).ok_or(FenError::RankWrongLength(row_idx))?;
                pos.put_piece(piece, Square::from_file_rank(file, rank));
                file_idx += 1;
            }
        }
        if file_idx != 8 {
            return Err(FenError::RankWrongLength(row_idx));
        }
    }
    Ok(())
}

fn validate_check_state(pos: &Position) -> Result<(), IllegalPositionError> {
    let white_in_check = pos.is_in_check(Color::White);
    let black_in_check = pos.is_in_check(Color::Black);
    if white_in_check && black_in_check {
        return Err(IllegalPositionError::BothKingsInCheck);
    }
    let side_not_to_move = !pos.side_to_move();
    let side_not_to_move_in_check = match side_not_to_move {
        Color::White => white_in_check,
        Color::Black => black_in_check,
    };
    if side_not_to_move_in_check {
        return Err(IllegalPositionError::SideNotToMoveInCheck);
    }

    Ok(())
}

/// Renders `pos` back to FEN text. Must round-trip (`parse(render(pos)) ==
/// pos`) for any position reachable through normal play (spec.md §8).
pub fn render(pos: &Position) -> String {
    let mut placement = String::new();
    for row_idx in 0..8 {
        let rank = Rank::from_index(7 - row_idx).expect("row_idx < 8");
        let mut run = 0u32;
        for file_idx in 0..8 {
            let file = File::from_index(file_idx).expect("file_idx < 8");
            match pos.piece_on(Square::from_file_rank(file, rank)) {
                Some(piece) => {
                    if run > 0 {
                        placement.push_str(&run.to_string());
                        run = 0;
                    }
                    placement.push(piece.fen_char());
                }
                None => run += 1,
            }
        }
        if run > 0 {
            placement.push_str(&run.to_string());
        }
        if row_idx != 7 {
            placement.push('/');
        }
    }

    let side = match pos.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    };

    let en_passant = match pos.en_passant_target() {
        Some(sq) => sq.to_string(),
        None => "-".to_string(),
    };

    format!(
        "{} {} {} {} {} {}",
        placement,
        side,
        pos.castle_rights().to_fen_field(),
        en_passant,
        pos.halfmove_clock(),
        pos.fullmove_number(),
    )
}
