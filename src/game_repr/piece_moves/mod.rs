pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::bitboards::squares;
use super::{Move, MoveBuffer, Piece, Position, Square};

impl Position {
    /// Pushes one move per set bit of `targets`; targets must not hold
    /// friendly pieces.
    pub(super) fn push_targets(&self, from: Square, piece: Piece, targets: u64, moves: &mut MoveBuffer) {
        for to in squares(targets) {
            let captured = self.piece_at(to).map(|p| p.piece_type);
            moves.push(Move::new(from, to, piece, captured));
        }
    }
}
