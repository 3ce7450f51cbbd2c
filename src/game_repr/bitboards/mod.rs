use super::{Color, Piece, Square, Type};

pub mod tables;
pub use tables::*;

/// Per-piece occupancy sets kept alongside the mailbox board.
/// Indexed by `[color][piece_type]`, one bit per square (a1 = bit 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Bitboards {
    pieces: [[u64; 6]; 2],
}

impl Bitboards {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn pieces_of_type(&self, color: Color, piece_type: Type) -> u64 {
        self.pieces[color.index()][piece_type.index()]
    }

    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        self.pieces[color.index()].iter().fold(0, |acc, bb| acc | bb)
    }

    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.occupied_by_color(Color::White) | self.occupied_by_color(Color::Black)
    }

    #[inline]
    pub fn add_piece(&mut self, piece: Piece, square: usize) {
        self.pieces[piece.color.index()][piece.piece_type.index()] |= 1u64 << square;
    }

    #[inline]
    pub fn remove_piece(&mut self, piece: Piece, square: usize) {
        self.pieces[piece.color.index()][piece.piece_type.index()] &= !(1u64 << square);
    }
}

/// Iterates the set bits of a bitboard as squares, lowest first.
pub struct SquareIter(u64);

impl Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = pop_lsb(&mut self.0);
        Square::new(sq as u8)
    }
}

pub fn squares(bb: u64) -> SquareIter {
    SquareIter(bb)
}

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}

#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

#[inline(always)]
pub fn bitscan_reverse(bb: u64) -> usize {
    63 - bb.leading_zeros() as usize
}

/// Squares reached along `directions` from `square`, stopping at (and
/// including) the first occupied square of each ray.
pub fn slider_attacks(square: usize, directions: &[usize], occupied: u64) -> u64 {
    let mut attacks = 0u64;
    for &direction in directions {
        let mut ray = RAYS[direction][square];
        let blockers = ray & occupied;
        if blockers != 0 {
            let blocker = if is_ascending(direction) {
                bitscan_forward(blockers)
            } else {
                bitscan_reverse(blockers)
            };
            ray &= !RAYS[direction][blocker];
        }
        attacks |= ray;
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bitboards() {
        let bb = Bitboards::empty();
        assert_eq!(bb.all_occupied(), 0);
    }

    #[test]
    fn test_add_remove_piece() {
        let mut bb = Bitboards::empty();
        let pawn = Piece::new(Color::White, Type::Pawn);
        bb.add_piece(pawn, 8);
        bb.add_piece(Piece::new(Color::Black, Type::Knight), 57);
        assert_eq!(bb.pieces_of_type(Color::White, Type::Pawn), 1u64 << 8);
        assert_eq!(bb.occupied_by_color(Color::Black), 1u64 << 57);
        assert_eq!(bb.all_occupied(), (1u64 << 8) | (1u64 << 57));

        bb.remove_piece(pawn, 8);
        assert_eq!(bb.occupied_by_color(Color::White), 0);
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb = 0b1010u64;
        assert_eq!(pop_lsb(&mut bb), 1);
        assert_eq!(bb, 0b1000);
        assert_eq!(pop_lsb(&mut bb), 3);
        assert_eq!(bb, 0);
    }

    #[test]
    fn test_square_iter_order() {
        let found: Vec<usize> = squares((1 << 3) | (1 << 40) | 1).map(|s| s.index()).collect();
        assert_eq!(found, vec![0, 3, 40]);
    }

    #[test]
    fn test_slider_attacks_stop_at_blocker() {
        // Rook on a1, blocker on a4: north ray is a2..a4, east ray the whole rank
        let occupied = 1u64 << 24;
        let attacks = slider_attacks(0, &ORTHOGONAL, occupied);
        let expected = (1u64 << 8) | (1u64 << 16) | (1u64 << 24) | 0xFE;
        assert_eq!(attacks, expected);
    }
}
