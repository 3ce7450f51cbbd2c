//! Position and move engine for a dual (live/archive) chess board viewer.
//!
//! [`board::BoardController`] is the entry point: it takes FEN snapshots and
//! move text from a game feed, keeps a ply-indexed history and produces text
//! diagrams and mobility scores.

pub mod board;
pub mod error;
pub mod evaluation;
pub mod game_repr;
pub mod notation;
pub mod render;

pub use board::{BoardController, BoardId, DualBoard, History, HistoryEntry};
pub use error::{BoardError, DisplayError, FenError, SanError};
