use crate::game_repr::bitboards::{slider_attacks, tables::DIAGONAL};
use crate::game_repr::{MoveBuffer, Piece, Position, Square};

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveBuffer) {
        let occupied = self.bitboards.all_occupied();
        let friendly = self.bitboards.occupied_by_color(piece.color);
        let targets = slider_attacks(from.index(), &DIAGONAL, occupied) & !friendly;
        self.push_targets(from, piece, targets, moves);
    }
}
