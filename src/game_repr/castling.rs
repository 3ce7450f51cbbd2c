use super::Color;

/// Castling availability, one bit per (side, wing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KING_SIDE: CastlingRights = CastlingRights(1);
    pub const WHITE_QUEEN_SIDE: CastlingRights = CastlingRights(2);
    pub const BLACK_KING_SIDE: CastlingRights = CastlingRights(4);
    pub const BLACK_QUEEN_SIDE: CastlingRights = CastlingRights(8);

    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(15);

    pub fn king_side(color: Color) -> CastlingRights {
        match color {
            Color::White => Self::WHITE_KING_SIDE,
            Color::Black => Self::BLACK_KING_SIDE,
        }
    }

    pub fn queen_side(color: Color) -> CastlingRights {
        match color {
            Color::White => Self::WHITE_QUEEN_SIDE,
            Color::Black => Self::BLACK_QUEEN_SIDE,
        }
    }

    pub fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: CastlingRights) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: CastlingRights) {
        self.0 &= !other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// FEN castling field in canonical `KQkq` order, `-` when empty.
    pub fn to_fen(self) -> String {
        let mut out = String::with_capacity(4);
        for (right, letter) in [
            (Self::WHITE_KING_SIDE, 'K'),
            (Self::WHITE_QUEEN_SIDE, 'Q'),
            (Self::BLACK_KING_SIDE, 'k'),
            (Self::BLACK_QUEEN_SIDE, 'q'),
        ] {
            if self.contains(right) {
                out.push(letter);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_fen_order() {
        let mut rights = CastlingRights::NONE;
        assert_eq!(rights.to_fen(), "-");
        rights.insert(CastlingRights::BLACK_QUEEN_SIDE);
        rights.insert(CastlingRights::WHITE_KING_SIDE);
        assert_eq!(rights.to_fen(), "Kq");
        rights.remove(CastlingRights::king_side(Color::White));
        assert_eq!(rights.to_fen(), "q");
        assert_eq!(CastlingRights::ALL.to_fen(), "KQkq");
    }
}
