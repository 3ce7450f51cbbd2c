mod castling;
mod moves;
mod piece;
mod position;
mod square;
mod piece_moves;
pub mod bitboards;
pub mod fen;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
pub use piece_moves::pawn::PROMOTION_TYPES;
