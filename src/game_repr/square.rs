use std::fmt;

/// One of the 64 board squares, `a1 = 0 ... h8 = 63` (`rank * 8 + file`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn new(index: u8) -> Option<Square> {
        (index < 64).then_some(Square(index))
    }

    /// Builds a square from 0-based file and rank. Both must be below 8.
    pub const fn from_file_rank(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline(always)]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Square colour: a1 is dark.
    pub fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }

    /// Shifts by file/rank deltas, `None` when that leaves the board.
    pub fn offset(self, files: i8, ranks: i8) -> Option<Square> {
        let file = self.file() as i8 + files;
        let rank = self.rank() as i8 + ranks;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::from_file_rank(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Parses `e4`-style names.
    pub fn from_algebraic(name: &str) -> Option<Square> {
        let mut chars = name.chars();
        let file = file_from_char(chars.next()?)?;
        let rank = rank_from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::from_file_rank(file, rank))
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_char(self.file()), (b'1' + self.rank()) as char)
    }
}

pub(crate) fn file_from_char(c: char) -> Option<u8> {
    match c {
        'a'..='h' => Some(c as u8 - b'a'),
        _ => None,
    }
}

pub(crate) fn rank_from_char(c: char) -> Option<u8> {
    match c {
        '1'..='8' => Some(c as u8 - b'1'),
        _ => None,
    }
}

pub(crate) fn file_char(file: u8) -> char {
    (b'a' + file) as char
}
