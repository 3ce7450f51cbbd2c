//! Snapshot codec: the six-field FEN text form of a [`Position`].

use std::fmt;
use std::str::FromStr;

use super::{CastlingRights, Color, Piece, Position, Square};
use crate::error::FenError;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses a snapshot. Nothing is returned unless every field is valid.
pub fn decode(text: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::FieldCount(fields.len()));
    }

    let mut pos = Position::empty();

    // ----- Field 1: Piece placement -----
    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file: u32 = 0;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => file += c as u32 - '0' as u32,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if file < 8 {
                        pos.put_piece(Square::from_file_rank(file as u8, rank), piece);
                    }
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::RankWidth { rank: rank + 1, files: file });
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth { rank: rank + 1, files: file });
        }
    }

    // ----- Field 2: Side to move -----
    pos.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::SideToMove(other.to_string())),
    };

    // ----- Field 3: Castling -----
    pos.castling = parse_castling(fields[2], &pos)?;

    // ----- Field 4: En passant -----
    if fields[3] != "-" {
        let square = Square::from_algebraic(fields[3])
            .filter(|sq| sq.rank() == 2 || sq.rank() == 5)
            .ok_or_else(|| FenError::EnPassant(fields[3].to_string()))?;
        pos.en_passant = Some(square);
    }

    // ----- Fields 5 and 6: counters -----
    pos.halfmove_clock = fields[4]
        .parse()
        .map_err(|_| FenError::HalfmoveClock(fields[4].to_string()))?;
    pos.fullmove_number = fields[5]
        .parse()
        .ok()
        .filter(|&n: &u32| n >= 1)
        .ok_or_else(|| FenError::FullmoveNumber(fields[5].to_string()))?;

    Ok(pos)
}

/// Canonical snapshot: empty runs collapsed, castling in `KQkq` order.
pub fn encode(position: &Position) -> String {
    let mut fen = String::with_capacity(90);

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;
        for file in 0..8 {
            match position.piece_at(Square::from_file_rank(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        fen.push((b'0' + empty_count) as char);
                        empty_count = 0;
                    }
                    fen.push(piece.to_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            fen.push((b'0' + empty_count) as char);
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match position.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&position.castling.to_fen());

    fen.push(' ');
    match position.en_passant {
        Some(square) => fen.push_str(&square.to_algebraic()),
        None => fen.push('-'),
    }

    fen.push_str(&format!(" {} {}", position.halfmove_clock, position.fullmove_number));
    fen
}

/// True when `text` is a complete, valid snapshot (move text is not).
pub fn is_valid(text: &str) -> bool {
    decode(text).is_ok()
}

/// `KQkq` letters or Shredder-style rook files (`HAha`), never repeated.
fn parse_castling(field: &str, pos: &Position) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::Castling(field.to_string());
    if field == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for c in field.chars() {
        let right = match c {
            'K' => Some(CastlingRights::WHITE_KING_SIDE),
            'Q' => Some(CastlingRights::WHITE_QUEEN_SIDE),
            'k' => Some(CastlingRights::BLACK_KING_SIDE),
            'q' => Some(CastlingRights::BLACK_QUEEN_SIDE),
            'A'..='H' => rook_file_right(pos, Color::White, c as u8 - b'A'),
            'a'..='h' => rook_file_right(pos, Color::Black, c as u8 - b'a'),
            _ => None,
        }
        .ok_or_else(invalid)?;

        if rights.contains(right) {
            return Err(invalid());
        }
        rights.insert(right);
    }
    Ok(rights)
}

/// Maps a rook file to the wing it lies on, relative to that side's king.
fn rook_file_right(pos: &Position, color: Color, file: u8) -> Option<CastlingRights> {
    let king = pos
        .king_square(color)
        .filter(|king| king.rank() == color.back_rank())?;
    match file.cmp(&king.file()) {
        std::cmp::Ordering::Greater => Some(CastlingRights::king_side(color)),
        std::cmp::Ordering::Less => Some(CastlingRights::queen_side(color)),
        std::cmp::Ordering::Equal => None,
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}
