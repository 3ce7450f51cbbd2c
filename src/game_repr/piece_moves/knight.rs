use crate::game_repr::bitboards::tables::KNIGHT_ATTACKS;
use crate::game_repr::{MoveBuffer, Piece, Position, Square};

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveBuffer) {
        let friendly = self.bitboards.occupied_by_color(piece.color);
        self.push_targets(from, piece, KNIGHT_ATTACKS[from.index()] & !friendly, moves);
    }
}
