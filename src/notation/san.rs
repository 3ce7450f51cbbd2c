//! Short algebraic notation: parsing a move token and resolving it against a
//! position to the one legal move it names.

use log::trace;

use crate::error::SanError;
use crate::game_repr::{Move, MoveBuffer, MoveFlags, Position, Square, Type};
use crate::game_repr::{file_from_char, rank_from_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wing {
    KingSide,
    QueenSide,
}

impl Wing {
    fn flag(self) -> MoveFlags {
        match self {
            Wing::KingSide => MoveFlags::KING_CASTLE,
            Wing::QueenSide => MoveFlags::QUEEN_CASTLE,
        }
    }
}

/// A parsed move token, before it is matched against a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanMove {
    Castle(Wing),
    Normal {
        piece: Type,
        from_file: Option<u8>,
        from_rank: Option<u8>,
        to: Square,
        promotion: Option<Type>,
    },
}

/// Parses a token such as `Nbd7`, `exd5`, `a8=Q+` or `O-O-O`.
///
/// Check and annotation suffixes are dropped. The capture marker is accepted
/// but not required to match the board.
pub fn parse(text: &str) -> Result<SanMove, SanError> {
    let body = text.trim().trim_end_matches(['+', '#', '!', '?']);
    if body.is_empty() {
        return Err(SanError::Empty);
    }
    let unparsable = || SanError::Unparsable(text.to_string());

    match body {
        "O-O" | "0-0" => return Ok(SanMove::Castle(Wing::KingSide)),
        "O-O-O" | "0-0-0" => return Ok(SanMove::Castle(Wing::QueenSide)),
        _ => {}
    }

    let mut chars: Vec<char> = body.chars().collect();

    let piece = match chars.first().copied() {
        Some(c @ ('N' | 'B' | 'R' | 'Q' | 'K')) => {
            chars.remove(0);
            Type::from_letter(c).ok_or_else(unparsable)?
        }
        _ => Type::Pawn,
    };

    // ----- Promotion suffix: `=Q` or a bare trailing `Q` -----
    let mut promotion = None;
    if piece == Type::Pawn {
        if let Some(&last) = chars.last() {
            if matches!(last, 'N' | 'B' | 'R' | 'Q') {
                promotion = Type::from_letter(last);
                chars.pop();
                if chars.last() == Some(&'=') {
                    chars.pop();
                }
            }
        }
    }
    if chars.last() == Some(&'=') {
        return Err(unparsable());
    }

    // ----- Destination square -----
    if chars.len() < 2 {
        return Err(unparsable());
    }
    let rank = chars.pop().and_then(rank_from_char).ok_or_else(unparsable)?;
    let file = chars.pop().and_then(file_from_char).ok_or_else(unparsable)?;
    let to = Square::from_file_rank(file, rank);

    // ----- Disambiguation and separators -----
    let mut from_file = None;
    let mut from_rank = None;
    for c in chars {
        match c {
            'x' | ':' | '-' => {}
            _ if from_file.is_none() && from_rank.is_none() && file_from_char(c).is_some() => {
                from_file = file_from_char(c);
            }
            _ if from_rank.is_none() && rank_from_char(c).is_some() => {
                from_rank = rank_from_char(c);
            }
            _ => return Err(unparsable()),
        }
    }

    Ok(SanMove::Normal {
        piece,
        from_file,
        from_rank,
        to,
        promotion,
    })
}

/// Finds the unique legal move `text` denotes. The position is not touched.
pub fn resolve(position: &Position, text: &str) -> Result<Move, SanError> {
    let us = position.side_to_move;

    let (piece, from_file, from_rank, to, promotion) = match parse(text)? {
        SanMove::Castle(wing) => {
            let illegal = || SanError::IllegalCastle(text.to_string());
            let king = position.king_square(us).ok_or_else(illegal)?;
            let mut moves = MoveBuffer::new();
            position.moves_from_into(king, &mut moves);
            return moves
                .into_iter()
                .find(|mv| mv.flags.contains(wing.flag()) && position.is_move_legal(mv))
                .ok_or_else(illegal);
        }
        SanMove::Normal {
            piece,
            from_file,
            from_rank,
            to,
            promotion,
        } => (piece, from_file, from_rank, to, promotion),
    };

    // A pawn token without a source file is a push along the destination file
    let from_file = match (piece, from_file) {
        (Type::Pawn, None) => Some(to.file()),
        (_, given) => given,
    };

    let mut candidates = MoveBuffer::new();
    for from in position.pieces_of(us, piece) {
        if from_file.is_some_and(|f| from.file() != f) || from_rank.is_some_and(|r| from.rank() != r) {
            continue;
        }
        position.moves_from_into(from, &mut candidates);
    }
    candidates.retain(|mv| mv.to == to && !mv.is_castle() && position.is_move_legal(mv));

    if candidates.is_empty() {
        return Err(SanError::NoMatch(text.to_string()));
    }

    let promotes = candidates.iter().any(|mv| mv.promotion.is_some());
    match promotion {
        None if promotes => return Err(SanError::MissingPromotion(text.to_string())),
        None => {}
        Some(_) if !promotes => return Err(SanError::UnexpectedPromotion(text.to_string())),
        Some(piece_type) => candidates.retain(|mv| mv.promotion == Some(piece_type)),
    }

    trace!("'{}' matched {} candidate(s)", text, candidates.len());
    match candidates.as_slice() {
        [mv] => Ok(*mv),
        [] => Err(SanError::NoMatch(text.to_string())),
        many => Err(SanError::Ambiguous {
            san: text.to_string(),
            candidates: many.len(),
        }),
    }
}

/// Resolves `text` and plays it. On error the position is unchanged.
pub fn apply(position: &mut Position, text: &str) -> Result<Move, SanError> {
    let mv = resolve(position, text)?;
    position.make_move(&mv);
    Ok(mv)
}
