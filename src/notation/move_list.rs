//! Tokenizer for game move text such as `38...Qg7 39. Rf2 Qh6`.

use log::debug;

const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// A move token anchored at its absolute ply (0 = White's first move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveToken {
    pub ply: usize,
    pub text: String,
}

/// Ordered move tokens with consecutive plies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    tokens: Vec<MoveToken>,
}

impl MoveList {
    /// Tokenizes `text`, giving the first move token `start_ply`.
    ///
    /// Move-number markers (`12.`, `12...`) are skipped, including when glued
    /// to the move that follows. They never change the ply counter; a marker
    /// that disagrees with it is only logged.
    pub fn parse(text: &str, start_ply: usize) -> MoveList {
        let mut tokens = Vec::new();
        let mut ply = start_ply;

        for word in text.split_whitespace() {
            if RESULTS.contains(&word) {
                continue;
            }
            let (marker, rest) = split_marker(word);
            if let Some((number, black)) = marker {
                let hinted = (number.max(1) - 1)
                    .checked_mul(2)
                    .and_then(|base| base.checked_add(usize::from(black)));
                if hinted != Some(ply) {
                    debug!("move marker '{}' does not match ply {}", word, ply);
                }
            }
            if rest.is_empty() {
                continue;
            }
            tokens.push(MoveToken {
                ply,
                text: rest.to_string(),
            });
            // no ply follows the last one
            match ply.checked_add(1) {
                Some(next) => ply = next,
                None => break,
            }
        }

        MoveList { tokens }
    }

    pub fn tokens(&self) -> &[MoveToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first_ply(&self) -> Option<usize> {
        self.tokens.first().map(|t| t.ply)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveToken> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a MoveToken;
    type IntoIter = std::slice::Iter<'a, MoveToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Splits a leading `N.` / `N...` marker off a word.
/// Returns the move number and whether it was the Black ellipsis form.
fn split_marker(word: &str) -> (Option<(usize, bool)>, &str) {
    let digits = word.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !word[digits..].starts_with('.') {
        return (None, word);
    }
    let Ok(number) = word[..digits].parse::<usize>() else {
        return (None, word);
    };
    let dots = word[digits..].bytes().take_while(|&b| b == b'.').count();
    (Some((number, dots >= 3)), &word[digits + dots..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &MoveList) -> Vec<(usize, &str)> {
        list.iter().map(|t| (t.ply, t.text.as_str())).collect()
    }

    #[test]
    fn test_opening_from_ply_zero() {
        let list = MoveList::parse("1. d4 Nf6 2. c4 c5 3. d5", 0);
        assert_eq!(
            texts(&list),
            vec![(0, "d4"), (1, "Nf6"), (2, "c4"), (3, "c5"), (4, "d5")]
        );
    }

    #[test]
    fn test_black_ellipsis_mid_game() {
        let list = MoveList::parse("38...Qg7 39. Rf2 Qh6 40. Nxg6", 75);
        assert_eq!(
            texts(&list),
            vec![(75, "Qg7"), (76, "Rf2"), (77, "Qh6"), (78, "Nxg6")]
        );
    }

    #[test]
    fn test_tokens_keep_suffixes() {
        let list = MoveList::parse("41...Kxg8 42. a8=Q+ Kg7", 81);
        assert_eq!(texts(&list), vec![(81, "Kxg8"), (82, "a8=Q+"), (83, "Kg7")]);
    }

    #[test]
    fn test_separate_ellipsis_and_result() {
        let list = MoveList::parse("17... Rd8 18. Rxd8# 1-0", 33);
        assert_eq!(texts(&list), vec![(33, "Rd8"), (34, "Rxd8#")]);
        assert_eq!(list.first_ply(), Some(33));
    }

    #[test]
    fn test_markers_do_not_move_the_counter() {
        // the caller's anchor wins over a misleading marker
        let list = MoveList::parse("5. e4 e5", 0);
        assert_eq!(texts(&list), vec![(0, "e4"), (1, "e5")]);
    }

    #[test]
    fn test_empty_text() {
        assert!(MoveList::parse("  ", 3).is_empty());
        assert!(MoveList::parse("1. 2. *", 0).is_empty());
    }

    #[test]
    fn test_huge_marker_is_only_a_marker() {
        let list = MoveList::parse("18446744073709551615. e4 9223372036854775808... e5", 0);
        assert_eq!(texts(&list), vec![(0, "e4"), (1, "e5")]);
    }

    #[test]
    fn test_counter_stops_at_last_ply() {
        let list = MoveList::parse("Kd8 Kd1 Ke8", usize::MAX - 1);
        assert_eq!(texts(&list), vec![(usize::MAX - 1, "Kd8"), (usize::MAX, "Kd1")]);
    }

    #[test]
    fn test_castles_are_not_markers() {
        let list = MoveList::parse("0-0 0-0-0", 10);
        assert_eq!(texts(&list), vec![(10, "0-0"), (11, "0-0-0")]);
    }
}
