use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to turn a square name into a square
pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, square: &str, color: Color, piece_type: Type) {
    pos.put_piece(sq(square), Piece::new(color, piece_type));
}

/// Helper function to decode a snapshot that is known to be valid
pub fn from_fen(text: &str) -> Position {
    fen::decode(text).unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Helper function to count moves carrying a flag
pub fn count_flag(moves: &[Move], flag: MoveFlags) -> usize {
    moves.iter().filter(|m| m.flags.contains(flag)).count()
}

/// Counts leaf nodes of the legal move tree
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = pos.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| {
            let mut next = pos.clone();
            next.make_move(mv);
            perft(&next, depth - 1)
        })
        .sum()
}

// ==================== TEST MODULES ====================

mod promotion;
mod check_detection;
mod stalemate;
mod perft;
