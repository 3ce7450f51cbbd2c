use smallvec::SmallVec;

use super::*;
use super::bitboards::{squares, slider_attacks, Bitboards, SquareIter};
use super::bitboards::tables::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE AND MOVE APPLICATION
 */

/// Move buffer used by generation; spills to the heap past 64 entries.
pub type MoveBuffer = SmallVec<[Move; 64]>;

/// Full board state: placement plus the FEN bookkeeping fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Bitboard representation for attack arithmetic (kept in sync with `board`)
    pub(crate) bitboards: Bitboards,
    /// Mailbox representation, a1 = 0 ... h8 = 63
    pub(crate) board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Target square of a double pawn push made on the previous move.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl Position {
    /// Empty board, White to move, no castling rights, move 1.
    pub fn empty() -> Position {
        Position {
            bitboards: Bitboards::empty(),
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position.
    pub fn start() -> Position {
        const BACK_RANK: [Type; 8] = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];

        let mut pos = Position::empty();
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            pos.put_piece(Square::from_file_rank(file, 0), Piece::new(Color::White, piece_type));
            pos.put_piece(Square::from_file_rank(file, 1), Piece::new(Color::White, Type::Pawn));
            pos.put_piece(Square::from_file_rank(file, 6), Piece::new(Color::Black, Type::Pawn));
            pos.put_piece(Square::from_file_rank(file, 7), Piece::new(Color::Black, piece_type));
        }
        pos.castling = CastlingRights::ALL;
        pos
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// Places `piece` on `square`, replacing whatever stood there.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.clear_square(square);
        self.board[square.index()] = Some(piece);
        self.bitboards.add_piece(piece, square.index());
    }

    /// Empties `square`, returning the piece that was on it.
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        let old = self.board[square.index()].take();
        if let Some(piece) = old {
            self.bitboards.remove_piece(piece, square.index());
        }
        old
    }

    pub fn pieces_of(&self, color: Color, piece_type: Type) -> SquareIter {
        squares(self.bitboards.pieces_of_type(color, piece_type))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, Type::King).next()
    }

    /// Absolute ply of the next move: 0 for White's first move.
    pub fn ply(&self) -> usize {
        let base = (self.fullmove_number.saturating_sub(1) as usize).saturating_mul(2);
        match self.side_to_move {
            Color::White => base,
            Color::Black => base.saturating_add(1),
        }
    }

    /// Checks if a square is under attack by any piece of the given color
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        let sq = square.index();
        let occupied = self.bitboards.all_occupied();
        let theirs = |piece_type| self.bitboards.pieces_of_type(by_color, piece_type);

        // A pawn of `by_color` attacks `sq` iff a pawn of the other colour on
        // `sq` would attack the pawn's square.
        if PAWN_ATTACKS[by_color.opposite().index()][sq] & theirs(Type::Pawn) != 0 {
            return true;
        }
        if KNIGHT_ATTACKS[sq] & theirs(Type::Knight) != 0 {
            return true;
        }
        if KING_ATTACKS[sq] & theirs(Type::King) != 0 {
            return true;
        }

        let queens = theirs(Type::Queen);
        if slider_attacks(sq, &DIAGONAL, occupied) & (theirs(Type::Bishop) | queens) != 0 {
            return true;
        }
        slider_attacks(sq, &ORTHOGONAL, occupied) & (theirs(Type::Rook) | queens) != 0
    }

    /// Checks if the king of the given color is currently in check.
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opposite()),
            None => false,
        }
    }

    /// Pseudo-legal moves of the piece on `square`, appended to `moves`.
    pub fn moves_from_into(&self, square: Square, moves: &mut MoveBuffer) {
        let Some(piece) = self.piece_at(square) else {
            return;
        };
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(square, piece, moves),
            Type::Knight => self.knight_moves_into(square, piece, moves),
            Type::Bishop => self.bishop_moves_into(square, piece, moves),
            Type::Rook => self.rook_moves_into(square, piece, moves),
            Type::Queen => self.queen_moves_into(square, piece, moves),
            Type::King => self.king_moves_into(square, piece, moves),
        }
    }

    /// Pseudo-legal moves for every piece of `color`, ignoring king safety.
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveBuffer {
        let mut moves = MoveBuffer::new();
        for square in squares(self.bitboards.occupied_by_color(color)) {
            self.moves_from_into(square, &mut moves);
        }
        moves
    }

    /// Checks if a move leaves the mover's king safe
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        let mut next = self.clone();
        next.make_move(mv);
        !next.is_in_check(mv.piece.color)
    }

    /// Legal moves for the side to move
    pub fn legal_moves(&self) -> MoveBuffer {
        let mut moves = self.pseudo_legal_moves(self.side_to_move);
        moves.retain(|mv| self.is_move_legal(mv));
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        self.pseudo_legal_moves(self.side_to_move)
            .iter()
            .any(|mv| self.is_move_legal(mv))
    }

    /// Side to move is in check and cannot get out of it
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Side to move is not in check but has no legal move
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Applies a generated move and updates all bookkeeping fields.
    /// The move must come from this position's generator.
    pub(crate) fn make_move(&mut self, mv: &Move) {
        let us = mv.piece.color;

        self.clear_square(mv.from);
        if mv.flags.contains(MoveFlags::EN_PASSANT) {
            self.clear_square(Square::from_file_rank(mv.to.file(), mv.from.rank()));
        }
        let landed = match mv.promotion {
            Some(piece_type) => Piece::new(us, piece_type),
            None => mv.piece,
        };
        self.put_piece(mv.to, landed);

        if mv.is_castle() {
            let rank = us.back_rank();
            let (rook_from, rook_to) = if mv.flags.contains(MoveFlags::KING_CASTLE) {
                (7, 5)
            } else {
                (0, 3)
            };
            if let Some(rook) = self.clear_square(Square::from_file_rank(rook_from, rank)) {
                self.put_piece(Square::from_file_rank(rook_to, rank), rook);
            }
        }

        // Castling rights: king moves lose both wings, anything touching a
        // corner loses that wing.
        if mv.piece.piece_type == Type::King {
            self.castling.remove(CastlingRights::king_side(us));
            self.castling.remove(CastlingRights::queen_side(us));
        }
        self.castling.remove(corner_right(mv.from));
        self.castling.remove(corner_right(mv.to));

        self.en_passant = if mv.flags.contains(MoveFlags::DOUBLE_PUSH) {
            Some(Square::from_file_rank(
                mv.from.file(),
                (mv.from.rank() + mv.to.rank()) / 2,
            ))
        } else {
            None
        };

        if mv.piece.piece_type == Type::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = us.opposite();
    }
}

/// The castling right a rook standing on `square` at game start carries.
fn corner_right(square: Square) -> CastlingRights {
    match (square.file(), square.rank()) {
        (0, 0) => CastlingRights::WHITE_QUEEN_SIDE,
        (7, 0) => CastlingRights::WHITE_KING_SIDE,
        (0, 7) => CastlingRights::BLACK_QUEEN_SIDE,
        (7, 7) => CastlingRights::BLACK_KING_SIDE,
        _ => CastlingRights::NONE,
    }
}
