use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Uppercase letter used by SAN and (for White) by FEN.
    pub fn letter(self) -> char {
        match self {
            Type::Pawn => 'P',
            Type::Knight => 'N',
            Type::Bishop => 'B',
            Type::Rook => 'R',
            Type::Queen => 'Q',
            Type::King => 'K',
        }
    }

    /// Case-insensitive inverse of [`Type::letter`].
    pub fn from_letter(c: char) -> Option<Type> {
        match c.to_ascii_uppercase() {
            'P' => Some(Type::Pawn),
            'N' => Some(Type::Knight),
            'B' => Some(Type::Bishop),
            'R' => Some(Type::Rook),
            'Q' => Some(Type::Queen),
            'K' => Some(Type::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Rank index (0-based) of this side's back rank.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank index a pawn of this side promotes on.
    pub fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }

    /// Signed rank step of a pawn push.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Parses a FEN piece letter: uppercase is White, lowercase is Black.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = Type::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = self.piece_type.letter();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_letters_roundtrip_case() {
        for c in "pnbrqkPNBRQK".chars() {
            let piece = Piece::from_char(c).unwrap();
            assert_eq!(piece.to_char(), c);
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
        assert_eq!(Color::Black.pawn_direction(), -1);
    }
}
