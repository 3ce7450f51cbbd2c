use crate::game_repr::{MoveBuffer, Piece, Position, Square};

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveBuffer) {
        self.bishop_moves_into(from, piece, moves);
        self.rook_moves_into(from, piece, moves);
    }
}
