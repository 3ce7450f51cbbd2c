//! Fixed-width text diagrams.
//!
//! One row per rank, cells separated by a single space. Empty dark squares
//! are drawn as `·` unless the plain option is set.

use super::{DisplayConfig, Renderer};
use crate::game_repr::{file_char, Position, Square};

const DARK_SQUARE: char = '\u{b7}';
const LIGHT_SQUARE: char = ' ';

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub config: DisplayConfig,
}

impl TextRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    fn cell(&self, position: &Position, square: Square) -> char {
        match position.piece_at(square) {
            Some(piece) => piece.to_char(),
            None if square.is_dark() && !self.config.plain => DARK_SQUARE,
            None => LIGHT_SQUARE,
        }
    }

    fn row(&self, gutter: char, cells: impl Iterator<Item = char>) -> String {
        let mut line = String::with_capacity(20);
        if self.config.show_ranks {
            line.push(gutter);
            for c in cells {
                line.push(' ');
                line.push(c);
            }
        } else {
            for (i, c) in cells.enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push(c);
            }
        }
        line
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn draw_position(&self, position: &Position) -> String {
        let (files, ranks): (Vec<u8>, Vec<u8>) = if self.config.flipped {
            ((0..8).rev().collect(), (0..8).collect())
        } else {
            ((0..8).collect(), (0..8).rev().collect())
        };

        let mut rows = Vec::with_capacity(9);
        if self.config.show_files {
            rows.push(self.row(' ', files.iter().map(|&f| file_char(f))));
        }
        for &rank in &ranks {
            let gutter = (b'1' + rank) as char;
            let cells = files
                .iter()
                .map(|&file| self.cell(position, Square::from_file_rank(file, rank)));
            rows.push(self.row(gutter, cells));
        }
        rows.join("\n")
    }
}

/// Renders `position` with `config`; no trailing newline.
pub fn render(position: &Position, config: DisplayConfig) -> String {
    TextRenderer::new(config).draw_position(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::fen;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn test_start_position_with_coordinates() {
        let out = render(&Position::start(), DisplayConfig::from_bits(5).unwrap());
        assert_eq!(
            lines(&out),
            vec![
                "  a b c d e f g h",
                "8 r n b q k b n r",
                "7 p p p p p p p p",
                "6   ·   ·   ·   ·",
                "5 ·   ·   ·   ·  ",
                "4   ·   ·   ·   ·",
                "3 ·   ·   ·   ·  ",
                "2 P P P P P P P P",
                "1 R N B Q K B N R",
            ]
        );
    }

    #[test]
    fn test_middlegame_without_coordinates() {
        let pos = fen::decode("6k1/pr3p1p/4p1p1/3pB1N1/bp1P2Rq/1nr4B/7K/1R1Q4 w KQkq - 0 1").unwrap();
        let out = render(&pos, DisplayConfig::default());
        assert_eq!(
            lines(&out),
            vec![
                "  ·   ·   · k ·",
                "p r ·   · p · p",
                "  ·   · p · p ·",
                "·   · p B   N  ",
                "b p   P   · R q",
                "· n r   ·   · B",
                "  ·   ·   ·   K",
                "· R · Q ·   ·  ",
            ]
        );
    }

    #[test]
    fn test_flipped_view_puts_rank_one_on_top() {
        let out = render(&Position::start(), DisplayConfig::from_bits(1 | 2 | 4).unwrap());
        let rows = lines(&out);
        assert_eq!(rows[0], "  h g f e d c b a");
        assert_eq!(rows[1], "1 R N B K Q B N R");
        assert_eq!(rows[8], "8 r n b k q b n r");
    }

    #[test]
    fn test_plain_drops_shading() {
        let out = render(&Position::empty(), DisplayConfig::from_bits(8).unwrap());
        assert!(!out.contains(DARK_SQUARE));
        assert_eq!(lines(&out).len(), 8);
        assert!(!out.ends_with('\n'));
    }
}
