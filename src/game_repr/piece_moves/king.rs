use crate::game_repr::bitboards::tables::KING_ATTACKS;
use crate::game_repr::{CastlingRights, Color, Move, MoveBuffer, MoveFlags, Piece, Position, Square, Type};

/// One castling wing: which files must be empty, which the king crosses.
struct CastleLane {
    right: CastlingRights,
    flag: MoveFlags,
    rook_file: u8,
    king_to_file: u8,
    empty_files: &'static [u8],
    king_path: &'static [u8],
}

fn lanes(color: Color) -> [CastleLane; 2] {
    [
        CastleLane {
            right: CastlingRights::king_side(color),
            flag: MoveFlags::KING_CASTLE,
            rook_file: 7,
            king_to_file: 6,
            empty_files: &[5, 6],
            king_path: &[5, 6],
        },
        CastleLane {
            right: CastlingRights::queen_side(color),
            flag: MoveFlags::QUEEN_CASTLE,
            rook_file: 0,
            king_to_file: 2,
            empty_files: &[1, 2, 3],
            king_path: &[3, 2],
        },
    ]
}

impl Position {
    /// Generate king steps plus any available castles
    pub fn king_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveBuffer) {
        let friendly = self.bitboards.occupied_by_color(piece.color);
        self.push_targets(from, piece, KING_ATTACKS[from.index()] & !friendly, moves);
        self.castle_moves_into(from, piece, moves);
    }

    /// Castles need the right, the rook at home, an empty lane, and a king
    /// that is not in check and does not cross an attacked square.
    fn castle_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveBuffer) {
        let color = piece.color;
        let rank = color.back_rank();
        if from != Square::from_file_rank(4, rank) {
            return;
        }

        let enemy = color.opposite();
        let mut checked = None;
        for lane in lanes(color) {
            if !self.castling.contains(lane.right) {
                continue;
            }
            let rook_square = Square::from_file_rank(lane.rook_file, rank);
            if self.piece_at(rook_square) != Some(Piece::new(color, Type::Rook)) {
                continue;
            }
            if lane
                .empty_files
                .iter()
                .any(|&file| self.piece_at(Square::from_file_rank(file, rank)).is_some())
            {
                continue;
            }
            if *checked.get_or_insert_with(|| self.is_square_attacked(from, enemy)) {
                return;
            }
            if lane
                .king_path
                .iter()
                .any(|&file| self.is_square_attacked(Square::from_file_rank(file, rank), enemy))
            {
                continue;
            }
            let to = Square::from_file_rank(lane.king_to_file, rank);
            moves.push(Move::new(from, to, piece, None).with_flags(lane.flag));
        }
    }
}
