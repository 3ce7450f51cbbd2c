use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_push_promotion_offers_four_pieces() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", Color::White, Type::King);
    place_piece(&mut pos, "h8", Color::Black, Type::King);
    place_piece(&mut pos, "c7", Color::White, Type::Pawn);

    let moves = pos.legal_moves();
    let promotions: Vec<_> = moves.iter().filter(|m| m.from == sq("c7")).collect();
    assert_eq!(promotions.len(), 4);
    for (mv, piece_type) in promotions.iter().zip(PROMOTION_TYPES) {
        assert_eq!(mv.promotion, Some(piece_type));
        assert_eq!(mv.flags, MoveFlags::PROMOTION);
    }
}

#[test]
fn test_capture_promotion_flags() {
    let pos = from_fen("1r5k/2P5/8/8/8/8/8/K7 w - - 0 1");
    let moves = pos.legal_moves();
    let capture = moves
        .iter()
        .find(|m| m.to == sq("b8") && m.promotion == Some(Type::Knight))
        .unwrap();
    assert!(capture.flags.contains(MoveFlags::CAPTURE));
    assert!(capture.flags.contains(MoveFlags::PROMOTION));
    assert_eq!(capture.flags.bits(), 2 | 16);
}

#[test]
fn test_promotion_replaces_pawn() {
    let mut pos = from_fen("7k/8/8/8/8/8/p7/7K b - - 0 1");
    let mv = pos
        .legal_moves()
        .into_iter()
        .find(|m| m.promotion == Some(Type::Queen))
        .unwrap();
    pos.make_move(&mv);
    assert_eq!(pos.piece_at(sq("a1")), Some(Piece::new(Color::Black, Type::Queen)));
    assert_eq!(pos.fullmove_number, 2);
}
