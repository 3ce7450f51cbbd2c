// Mobility scores checked against the numbers the viewer displays

use crate::evaluation::{MobilityEvaluator, MobilityWeights};
use crate::game_repr::{fen, Color, Position};

fn score(text: &str) -> f64 {
    let pos = fen::decode(text).unwrap();
    MobilityEvaluator::default().score(&pos)
}

#[test]
fn test_mated_side_scores_zero() {
    assert_eq!(score("5k2/5Q2/5K2/8/8/8/8/8 b - - 0 1"), 0.0);
}

#[test]
fn test_stalemated_white_scores_bare_tempo() {
    assert_eq!(score("8/8/8/8/8/5k2/5p2/5K2 w - - 0 1"), -0.5);
}

#[test]
fn test_black_king_with_one_move() {
    assert_eq!(score("8/8/7k/5B2/6K1/8/8/8 b - - 0 1"), 1.5);
}

#[test]
fn test_white_king_in_check() {
    assert_eq!(score("8/8/4k3/5q2/6K1/8/8/8 w - - 0 1"), -2.0);
}

#[test]
fn test_starting_position() {
    assert_eq!(score(fen::START_FEN), -20.5);
}

#[test]
fn test_starting_position_balanced() {
    let pos = Position::start();
    let eval = MobilityEvaluator::default();
    assert_eq!(eval.side_mobility(&pos, Color::White), 20.0);
    assert_eq!(eval.side_mobility(&pos, Color::Black), 20.0);
    assert_eq!(eval.balance(&pos), 0.0);
}

#[test]
fn test_custom_weights_scale_by_piece_kind() {
    let weights = MobilityWeights {
        knight: 3.0,
        ..MobilityWeights::REFERENCE
    };
    let eval = MobilityEvaluator::new(&weights);
    // 16 pawn moves at 1.0 plus 4 knight moves at 3.0, plus tempo
    assert_eq!(eval.score(&Position::start()), -28.5);
}

#[test]
fn test_balance_ignores_pins() {
    // The e2 rook is pinned but still counts toward pseudo-legal mobility
    let pos = fen::decode("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
    let eval = MobilityEvaluator::default();
    let legal = pos.legal_moves().len() as f64;
    assert!(eval.side_mobility(&pos, Color::White) > legal);
}
