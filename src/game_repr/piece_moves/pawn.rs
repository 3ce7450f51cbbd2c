use crate::game_repr::bitboards::{squares, tables::PAWN_ATTACKS};
use crate::game_repr::{Color, Move, MoveBuffer, MoveFlags, Piece, Position, Square, Type};

/// Pieces a pawn may promote to, most common first.
pub const PROMOTION_TYPES: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

impl Position {
    /// Generate pawn moves (pushes, captures, en passant, promotions)
    pub fn pawn_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveBuffer) {
        let color = piece.color;
        let forward = color.pawn_direction();
        let start_rank = match color {
            Color::White => 1,
            Color::Black => 6,
        };

        if let Some(one) = from.offset(0, forward) {
            if self.piece_at(one).is_none() {
                push_pawn_move(Move::new(from, one, piece, None), moves);

                if from.rank() == start_rank {
                    if let Some(two) = one.offset(0, forward) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::new(from, two, piece, None).with_flags(MoveFlags::DOUBLE_PUSH));
                        }
                    }
                }
            }
        }

        let attacks = PAWN_ATTACKS[color.index()][from.index()];
        let enemies = self.bitboards.occupied_by_color(color.opposite());
        for to in squares(attacks & enemies) {
            let captured = self.piece_at(to).map(|p| p.piece_type);
            push_pawn_move(Move::new(from, to, piece, captured), moves);
        }

        // The en-passant square only concerns the side to move
        if color != self.side_to_move {
            return;
        }
        if let Some(target) = self.en_passant {
            let victim = Square::from_file_rank(target.file(), from.rank());
            if attacks & (1u64 << target.index()) != 0
                && self.piece_at(target).is_none()
                && self.piece_at(victim) == Some(Piece::new(color.opposite(), Type::Pawn))
            {
                moves.push(Move {
                    flags: MoveFlags::EN_PASSANT,
                    ..Move::new(from, target, piece, Some(Type::Pawn))
                });
            }
        }
    }
}

/// Expands a move onto the last rank into one move per promotion piece.
fn push_pawn_move(mv: Move, moves: &mut MoveBuffer) {
    if mv.to.rank() == mv.piece.color.promotion_rank() {
        for piece_type in PROMOTION_TYPES {
            moves.push(mv.promoting_to(piece_type));
        }
    } else {
        moves.push(mv);
    }
}
