use crate::game_repr::bitboards::{slider_attacks, tables::ORTHOGONAL};
use crate::game_repr::{MoveBuffer, Piece, Position, Square};

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveBuffer) {
        let occupied = self.bitboards.all_occupied();
        let friendly = self.bitboards.occupied_by_color(piece.color);
        let targets = slider_attacks(from.index(), &ORTHOGONAL, occupied) & !friendly;
        self.push_targets(from, piece, targets, moves);
    }
}
