use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_rook_check() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);
    assert!(pos.is_in_check(Color::White));
}

#[test]
fn test_blocked_check() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", Color::White, Type::King);
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);
    place_piece(&mut pos, "e4", Color::White, Type::Bishop);
    assert!(!pos.is_in_check(Color::White));
}

#[test]
fn test_pawn_check_direction() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", Color::White, Type::King);
    place_piece(&mut pos, "d5", Color::Black, Type::Pawn);
    assert!(pos.is_in_check(Color::White));

    // a black pawn behind the king gives no check
    let mut behind = empty_board();
    place_piece(&mut behind, "e4", Color::White, Type::King);
    place_piece(&mut behind, "d3", Color::Black, Type::Pawn);
    assert!(!behind.is_in_check(Color::White));
}

#[test]
fn test_knight_check() {
    let pos = from_fen("4k3/8/3N4/8/8/8/8/4K3 b - - 0 1");
    assert!(pos.is_in_check(Color::Black));
    assert!(!pos.is_in_check(Color::White));
}

#[test]
fn test_side_without_king_is_never_in_check() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", Color::Black, Type::Queen);
    assert!(!pos.is_in_check(Color::White));
}

#[test]
fn test_checkmate_back_rank() {
    let pos = from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    assert!(!pos.is_checkmate());
    let mut mated = from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1");
    assert!(mated.is_checkmate());
    assert!(mated.legal_moves().is_empty());

    // an open g7 gives the king a flight square
    mated.clear_square(sq("g7"));
    assert!(!mated.is_checkmate());
    assert!(mated.is_in_check(Color::Black));
}

#[test]
fn test_pinned_piece_cannot_move() {
    let pos = from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let moves = pos.legal_moves();
    assert!(moves.iter().all(|m| m.from != sq("e2")));
}
