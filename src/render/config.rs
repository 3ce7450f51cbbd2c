//! Display configuration for board diagrams.
//!
//! Hosts hand over a bitmask; it is validated once into a [`DisplayConfig`]
//! and never changes after that.

use std::ops::BitOr;

use crate::error::DisplayError;

/// Raw display bits as exchanged with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayFlags(u8);

impl DisplayFlags {
    /// Rank digit gutter on the left
    pub const RANKS: DisplayFlags = DisplayFlags(1);
    /// Black's point of view
    pub const FLIPPED: DisplayFlags = DisplayFlags(2);
    /// File letter header row
    pub const FILES: DisplayFlags = DisplayFlags(4);
    /// No dark-square shading
    pub const PLAIN: DisplayFlags = DisplayFlags(8);

    const KNOWN: u8 = 0b1111;

    pub fn from_bits(bits: u8) -> Result<DisplayFlags, DisplayError> {
        if bits & !Self::KNOWN != 0 {
            return Err(DisplayError::UnknownFlags(bits));
        }
        Ok(DisplayFlags(bits))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: DisplayFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for DisplayFlags {
    type Output = DisplayFlags;

    fn bitor(self, rhs: DisplayFlags) -> DisplayFlags {
        DisplayFlags(self.0 | rhs.0)
    }
}

/// Immutable rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub show_ranks: bool,
    pub show_files: bool,
    pub flipped: bool,
    pub plain: bool,
}

impl DisplayConfig {
    /// Validates a host bitmask. Unknown bits are an error.
    pub fn from_bits(bits: u8) -> Result<DisplayConfig, DisplayError> {
        DisplayFlags::from_bits(bits).map(DisplayConfig::from)
    }

    pub fn flags(&self) -> DisplayFlags {
        let mut bits = 0;
        for (on, flag) in [
            (self.show_ranks, DisplayFlags::RANKS),
            (self.flipped, DisplayFlags::FLIPPED),
            (self.show_files, DisplayFlags::FILES),
            (self.plain, DisplayFlags::PLAIN),
        ] {
            if on {
                bits |= flag.bits();
            }
        }
        DisplayFlags(bits)
    }

    /// Same options seen from the other side of the board.
    pub fn flip(self) -> DisplayConfig {
        DisplayConfig {
            flipped: !self.flipped,
            ..self
        }
    }
}

impl From<DisplayFlags> for DisplayConfig {
    fn from(flags: DisplayFlags) -> Self {
        DisplayConfig {
            show_ranks: flags.contains(DisplayFlags::RANKS),
            show_files: flags.contains(DisplayFlags::FILES),
            flipped: flags.contains(DisplayFlags::FLIPPED),
            plain: flags.contains(DisplayFlags::PLAIN),
        }
    }
}
