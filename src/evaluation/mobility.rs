// Mobility evaluation
// Scores are in moves, weighted per moving piece kind

use crate::game_repr::{Color, Move, Position, Type};

/// Bonus for the side to move when it is not in check
pub const TEMPO_BONUS: f64 = 0.5;

/// Weight of one move, per kind of the moving piece
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobilityWeights {
    pub pawn: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
    pub king: f64,
}

impl MobilityWeights {
    /// Every move counts once, matching the numbers the viewer reports.
    pub const REFERENCE: MobilityWeights = MobilityWeights {
        pawn: 1.0,
        knight: 1.0,
        bishop: 1.0,
        rook: 1.0,
        queen: 1.0,
        king: 1.0,
    };

    pub fn weight(&self, piece_type: Type) -> f64 {
        match piece_type {
            Type::Pawn => self.pawn,
            Type::Knight => self.knight,
            Type::Bishop => self.bishop,
            Type::Rook => self.rook,
            Type::Queen => self.queen,
            Type::King => self.king,
        }
    }
}

impl Default for MobilityWeights {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Scores positions against a borrowed weight table.
#[derive(Clone, Copy, Debug)]
pub struct MobilityEvaluator<'w> {
    weights: &'w MobilityWeights,
}

impl Default for MobilityEvaluator<'static> {
    fn default() -> Self {
        MobilityEvaluator::new(&MobilityWeights::REFERENCE)
    }
}

impl<'w> MobilityEvaluator<'w> {
    pub const fn new(weights: &'w MobilityWeights) -> Self {
        Self { weights }
    }

    /// The viewer's mobility number.
    ///
    /// Weighted legal moves of the side to move, plus [`TEMPO_BONUS`] when it
    /// is not in check. Negative when White is to move, positive for Black.
    /// A mated side scores 0; a stalemated side scores the bare bonus.
    pub fn score(&self, pos: &Position) -> f64 {
        let us = pos.side_to_move;
        let mut score = self.weighted(&pos.legal_moves());
        if !pos.is_in_check(us) {
            score += TEMPO_BONUS;
        }
        match us {
            Color::White => -score,
            Color::Black => score,
        }
    }

    /// Pseudo-legal mobility of White minus that of Black.
    pub fn balance(&self, pos: &Position) -> f64 {
        self.side_mobility(pos, Color::White) - self.side_mobility(pos, Color::Black)
    }

    /// Weighted pseudo-legal moves of one side, king safety ignored
    pub fn side_mobility(&self, pos: &Position, color: Color) -> f64 {
        self.weighted(&pos.pseudo_legal_moves(color))
    }

    fn weighted(&self, moves: &[Move]) -> f64 {
        moves
            .iter()
            .map(|mv| self.weights.weight(mv.piece.piece_type))
            .sum()
    }
}
