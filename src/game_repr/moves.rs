use std::fmt;

use super::{Piece, Square, Type};

/*-------MOVE FLAGS--------*/

// | 64 | 32 | 16 | 8  | 4  | 2  | 1  |
// | O-O-O | O-O | =Q | ep | 2x | x | - |

/// Bit set describing how a move was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags(1 << 0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 1);
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags(1 << 2);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 3);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 4);
    pub const KING_CASTLE: MoveFlags = MoveFlags(1 << 5);
    pub const QUEEN_CASTLE: MoveFlags = MoveFlags(1 << 6);

    pub const fn empty() -> Self {
        MoveFlags(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: MoveFlags) {
        self.0 |= other.0;
    }

    pub fn is_castle(self) -> bool {
        self.0 & (Self::KING_CASTLE.0 | Self::QUEEN_CASTLE.0) != 0
    }
}

impl std::ops::BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

/// A fully resolved transition. Produced by move generation and the SAN
/// resolver, stored in board history; never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    /// Kind of the removed enemy piece, including en-passant victims.
    pub captured: Option<Type>,
    pub flags: MoveFlags,
    /// Set iff `flags` contains [`MoveFlags::PROMOTION`].
    pub promotion: Option<Type>,
}

impl Move {
    pub(crate) fn new(from: Square, to: Square, piece: Piece, captured: Option<Type>) -> Move {
        let flags = if captured.is_some() {
            MoveFlags::CAPTURE
        } else {
            MoveFlags::QUIET
        };
        Move {
            from,
            to,
            piece,
            captured,
            flags,
            promotion: None,
        }
    }

    pub(crate) fn with_flags(mut self, flags: MoveFlags) -> Move {
        // special moves drop the QUIET marker
        if self.flags == MoveFlags::QUIET {
            self.flags = MoveFlags::empty();
        }
        self.flags.insert(flags);
        self
    }

    pub(crate) fn promoting_to(self, piece_type: Type) -> Move {
        Move {
            promotion: Some(piece_type),
            ..self.with_flags(MoveFlags::PROMOTION)
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_castle(&self) -> bool {
        self.flags.is_castle()
    }
}

/// Coordinate form (`e2e4`, `e7e8q`), handy for logs.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
