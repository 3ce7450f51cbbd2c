//! Error types for every fallible entry point.
//!
//! None of these leave a half-updated position behind: decoding builds a
//! fresh [`Position`](crate::game_repr::Position) and move resolution works on
//! a copy until the move is known to be unique and legal.

/// A snapshot string that does not describe a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 6 fields, got {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("rank {rank} covers {files} files instead of 8")]
    RankWidth { rank: u8, files: u32 },

    #[error("invalid character '{0}' in piece placement")]
    InvalidPiece(char),

    #[error("invalid side to move: '{0}'")]
    SideToMove(String),

    #[error("invalid castling field: '{0}'")]
    Castling(String),

    #[error("invalid en passant square: '{0}'")]
    EnPassant(String),

    #[error("invalid halfmove clock: '{0}'")]
    HalfmoveClock(String),

    #[error("invalid fullmove number: '{0}'")]
    FullmoveNumber(String),
}

/// Move text that does not denote exactly one legal move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanError {
    #[error("empty move text")]
    Empty,

    #[error("unrecognized move text: '{0}'")]
    Unparsable(String),

    #[error("no legal move matches '{0}'")]
    NoMatch(String),

    #[error("'{san}' is ambiguous between {candidates} moves")]
    Ambiguous { san: String, candidates: usize },

    #[error("castling '{0}' is not allowed in this position")]
    IllegalCastle(String),

    #[error("'{0}' reaches the last rank without a promotion piece")]
    MissingPromotion(String),

    #[error("'{0}' asks for a promotion the move cannot make")]
    UnexpectedPromotion(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    #[error("unknown display flag bits {0:#04x}")]
    UnknownFlags(u8),
}

/// Failures surfaced by [`BoardController`](crate::board::BoardController).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    San(#[from] SanError),

    #[error(transparent)]
    Display(#[from] DisplayError),

    /// A move list was applied up to `ply`, where resolution failed.
    /// The `applied` moves before it stay on the board.
    #[error("move list stopped at ply {ply} after {applied} moves: {source}")]
    Batch {
        ply: usize,
        applied: usize,
        #[source]
        source: SanError,
    },

    /// A move list disagrees with a played ply and the board cannot go back
    /// to the position before it.
    #[error("move list has '{feed}' at ply {ply} where the board played '{board}' ({applied} moves applied)")]
    Diverged {
        ply: usize,
        board: String,
        feed: String,
        applied: usize,
    },

    /// A move list skipped plies the board has not reached yet.
    #[error("move list resumes at ply {found} but the board is at ply {expected} ({applied} moves applied)")]
    PlyGap {
        expected: usize,
        found: usize,
        applied: usize,
    },
}
