use super::*;

// ==================== STALEMATE TESTS ====================

#[test]
fn test_basic_stalemate() {
    let mut pos = empty_board();

    // White king trapped in corner by a queen that gives no check
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "c2", Color::Black, Type::Queen);
    place_piece(&mut pos, "h8", Color::Black, Type::King);

    assert!(!pos.is_in_check(Color::White), "King should not be in check");
    assert!(!pos.has_legal_moves(), "Should have no legal moves");
    assert!(pos.is_stalemate(), "Should be stalemate");
    assert!(!pos.is_checkmate());
}

#[test]
fn test_not_stalemate_when_in_check() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "a8", Color::Black, Type::Rook);
    place_piece(&mut pos, "b8", Color::Black, Type::Rook);

    assert!(!pos.is_stalemate());
    assert!(pos.is_checkmate());
}

#[test]
fn test_pawn_blocked_stalemate() {
    let pos = from_fen("8/8/8/8/8/5k2/5p2/5K2 w - - 0 1");
    assert!(pos.is_stalemate());
}
