use crate::game_repr::Position;

pub mod config;
pub mod text;

pub use config::{DisplayConfig, DisplayFlags};
pub use text::{render, TextRenderer};

/// Trait for drawing a position.
/// Backends decide what a drawing is; the text backend produces a `String`.
pub trait Renderer {
    type Output;

    /// Draw the given board state
    fn draw_position(&self, position: &Position) -> Self::Output;
}
