use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace, warn};

use crate::error::{BoardError, FenError};
use crate::evaluation::MobilityEvaluator;
use crate::game_repr::{fen, Move, Position};
use crate::notation::{san, MoveList};
use crate::render::{render, DisplayConfig};

/// Which of the two linked boards a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardId {
    /// Follows the game feed move by move
    Live,
    /// Reference board for looking back through a game
    Archive,
}

impl BoardId {
    pub fn other(self) -> BoardId {
        match self {
            BoardId::Live => BoardId::Archive,
            BoardId::Archive => BoardId::Live,
        }
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardId::Live => f.write_str("live"),
            BoardId::Archive => f.write_str("archive"),
        }
    }
}

/// One recorded ply.
///
/// Tokens merged from a feed arrive as bare text; `mv` and `fen` are filled
/// once the token has been played on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub san: String,
    pub mv: Option<Move>,
    /// Snapshot of the position after this ply
    pub fen: Option<String>,
}

impl HistoryEntry {
    fn token(san: &str) -> Self {
        Self {
            san: san.to_string(),
            mv: None,
            fen: None,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.fen.is_some()
    }
}

/// Ply-indexed move history. Plies that were never recorded are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History(BTreeMap<usize, HistoryEntry>);

impl History {
    pub fn get(&self, ply: usize) -> Option<&HistoryEntry> {
        self.0.get(&ply)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first_ply(&self) -> Option<usize> {
        self.0.keys().next().copied()
    }

    pub fn last_ply(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }

    /// Entries in ply order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &HistoryEntry)> + '_ {
        self.0.iter().map(|(&ply, entry)| (ply, entry))
    }

    /// Plies whose position is known, in order.
    pub fn applied_plies(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.iter().filter(|(_, e)| e.is_applied()).map(|(ply, _)| ply)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Merges bare tokens, overwriting entries at the same ply.
    /// An entry that already holds the same text keeps its resolved move.
    /// Returns the number of entries written.
    pub fn merge(&mut self, list: &MoveList) -> usize {
        let mut written = 0;
        for token in list {
            match self.0.get(&token.ply) {
                Some(existing) if existing.san == token.text => {}
                _ => {
                    self.0.insert(token.ply, HistoryEntry::token(&token.text));
                    written += 1;
                }
            }
        }
        written
    }

    /// Drops `ply` and everything after it.
    fn truncate_from(&mut self, ply: usize) {
        self.0.retain(|&recorded, _| recorded < ply);
    }

    fn record(&mut self, ply: usize, entry: HistoryEntry) {
        // a different move at this ply starts a new line
        if self.0.get(&ply).is_some_and(|old| old.san != entry.san) {
            self.0.retain(|&recorded, _| recorded <= ply);
        }
        self.0.insert(ply, entry);
    }
}

/// Board controller: one position, its move history and a navigation cursor.
///
/// The controller is what the viewer talks to. Move text from the feed goes
/// in through [`apply_move_text`](Self::apply_move_text) and
/// [`apply_move_list_text`](Self::apply_move_list_text); diagrams, snapshots
/// and mobility scores come out.
///
/// # Position vs. cursor
///
/// Moves are always played on the head position. The cursor only selects
/// which recorded ply is reported by [`cursor_fen`](Self::cursor_fen) and
/// [`render_at_cursor`](Self::render_at_cursor); moving it never touches the
/// head. A cursor of `None` means the snapshot passed to the last
/// [`load`](Self::load), before any recorded move.
///
/// # Usage
///
/// ```rust
/// use board_viewer::board::{BoardController, BoardId};
///
/// let mut board = BoardController::new(BoardId::Live);
/// board.apply_move_list_text("1. d4 Nf6 2. c4", 0).unwrap();
/// assert_eq!(board.position().ply(), 3);
///
/// board.prev();
/// assert_eq!(board.cursor(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct BoardController {
    id: BoardId,

    /// Free-form label for logs (game id, player names, ...)
    name: String,

    /// Head position: every move is played here
    position: Position,

    /// Snapshot of the last load, reported when the cursor is `None`
    initial_fen: String,

    history: History,

    cursor: Option<usize>,

    config: DisplayConfig,
}

impl BoardController {
    /// Create a controller on the standard starting position.
    pub fn new(id: BoardId) -> Self {
        Self::with_position(id, Position::start())
    }

    /// Create a controller from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns the decoding error when `snapshot` is not a valid FEN.
    pub fn from_fen(id: BoardId, snapshot: &str) -> Result<Self, FenError> {
        Ok(Self::with_position(id, fen::decode(snapshot)?))
    }

    fn with_position(id: BoardId, position: Position) -> Self {
        Self {
            id,
            name: id.to_string(),
            initial_fen: fen::encode(&position),
            position,
            history: History::default(),
            cursor: None,
            config: DisplayConfig::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    // ===========================
    // Read-only access
    // ===========================

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
    }

    /// Snapshot of the head position.
    pub fn fen(&self) -> String {
        fen::encode(&self.position)
    }

    /// Diagram of the head position with the current display options.
    pub fn render(&self) -> String {
        render(&self.position, self.config)
    }

    /// The viewer's mobility number for the head position.
    pub fn mobility(&self) -> f64 {
        MobilityEvaluator::default().score(&self.position)
    }

    /// White's pseudo-legal mobility minus Black's.
    pub fn balance(&self) -> f64 {
        MobilityEvaluator::default().balance(&self.position)
    }

    /// Looks up a recorded ply on the companion board.
    ///
    /// The companion is only read; the two controllers never share state.
    pub fn lookup_in<'o>(&self, other: &'o BoardController, ply: usize) -> Option<&'o HistoryEntry> {
        trace!("{} board looks up ply {} on {} board", self.name, ply, other.name);
        other.history.get(ply)
    }

    // ===========================
    // Mutation
    // ===========================

    /// Replace the head position with a snapshot.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - six-field FEN
    /// * `reset_history` - drop every recorded ply as well
    ///
    /// # Errors
    ///
    /// An invalid snapshot is rejected and the controller is left as it was.
    pub fn load(&mut self, snapshot: &str, reset_history: bool) -> Result<(), FenError> {
        let position = fen::decode(snapshot).map_err(|err| {
            warn!("{}: rejected snapshot '{}': {}", self.name, snapshot, err);
            err
        })?;

        self.initial_fen = fen::encode(&position);
        self.position = position;
        if reset_history {
            self.history.clear();
        }

        // Point the cursor at the ply that produced this position, if known
        self.cursor = self
            .position
            .ply()
            .checked_sub(1)
            .filter(|&ply| self.history.get(ply).is_some_and(HistoryEntry::is_applied));
        debug!("{}: loaded {}", self.name, self.initial_fen);
        Ok(())
    }

    /// Play one move on the head position.
    ///
    /// The move is recorded at the head's ply and the cursor follows it.
    ///
    /// # Errors
    ///
    /// Move text that does not name exactly one legal move. Nothing changes.
    pub fn apply_move_text(&mut self, text: &str) -> Result<Move, BoardError> {
        let ply = self.position.ply();
        let mv = san::apply(&mut self.position, text).map_err(|err| {
            warn!("{}: cannot play '{}' at ply {}: {}", self.name, text, ply, err);
            err
        })?;

        self.history.record(
            ply,
            HistoryEntry {
                san: text.to_string(),
                mv: Some(mv),
                fen: Some(fen::encode(&self.position)),
            },
        );
        self.cursor = Some(ply);
        debug!("{}: ply {} {} ({})", self.name, ply, text, mv);
        Ok(mv)
    }

    /// Play a fragment of game text.
    ///
    /// Tokens are anchored at `start_ply` and replayed in order starting from
    /// the head position as it is when the call begins. Tokens for plies the
    /// board has already played are skipped when they match the history. A
    /// token that disagrees with a played ply takes the board back to the
    /// position before that ply and the fragment is replayed from there.
    ///
    /// # Returns
    ///
    /// The number of moves played.
    ///
    /// # Errors
    ///
    /// Stops at the first token that cannot be played. Moves before it stay
    /// on the board, the rest of the fragment is dropped.
    ///
    /// [`BoardError::Diverged`] when a token disagrees with a played ply whose
    /// preceding position is unknown. The feed's token replaces the entry and
    /// the plies after it are dropped, but the head stays where it was.
    pub fn apply_move_list_text(&mut self, text: &str, start_ply: usize) -> Result<usize, BoardError> {
        let list = MoveList::parse(text, start_ply);
        let head = self.position.ply();
        if list.first_ply().is_some_and(|first| first > head) {
            warn!(
                "{}: fragment starts at ply {} but the board is at ply {}",
                self.name, start_ply, head
            );
        }

        let mut applied = 0;
        for token in &list {
            if token.ply < self.position.ply() {
                match self.history.get(token.ply) {
                    Some(entry) if entry.san == token.text => continue,
                    Some(entry) => {
                        let played = entry.san.clone();
                        warn!(
                            "{}: feed has '{}' at ply {}, board played '{}'",
                            self.name, token.text, token.ply, played
                        );
                        self.rewind(token.ply, &played, &token.text, applied)?;
                    }
                    None => {
                        trace!("{}: ply {} predates the board", self.name, token.ply);
                        continue;
                    }
                }
            }

            let expected = self.position.ply();
            if token.ply > expected {
                return Err(BoardError::PlyGap {
                    expected,
                    found: token.ply,
                    applied,
                });
            }

            match self.apply_move_text(&token.text) {
                Ok(_) => applied += 1,
                Err(BoardError::San(source)) => {
                    return Err(BoardError::Batch {
                        ply: token.ply,
                        applied,
                        source,
                    })
                }
                Err(other) => return Err(other),
            }
        }

        Ok(applied)
    }

    /// Puts the head back to the position before `ply` so the feed's line can
    /// be played there.
    fn rewind(&mut self, ply: usize, played: &str, feed: &str, applied: usize) -> Result<(), BoardError> {
        let Some(snapshot) = self.snapshot_before(ply) else {
            self.history.record(ply, HistoryEntry::token(feed));
            if self.cursor.is_some_and(|c| !self.history.get(c).is_some_and(HistoryEntry::is_applied)) {
                self.cursor = self.history.applied_plies().next_back();
            }
            return Err(BoardError::Diverged {
                ply,
                board: played.to_string(),
                feed: feed.to_string(),
                applied,
            });
        };

        self.position = fen::decode(&snapshot)?;
        self.history.truncate_from(ply);
        self.cursor = ply
            .checked_sub(1)
            .filter(|&prev| self.history.get(prev).is_some_and(HistoryEntry::is_applied));
        debug!("{}: back to ply {} for the feed's line", self.name, ply);
        Ok(())
    }

    /// Snapshot of the position in which `ply` is to be played, if known.
    fn snapshot_before(&self, ply: usize) -> Option<String> {
        if fen::decode(&self.initial_fen).is_ok_and(|initial| initial.ply() == ply) {
            return Some(self.initial_fen.clone());
        }
        let prev = self.history.get(ply.checked_sub(1)?)?;
        prev.fen.clone()
    }

    /// Merge a fragment's tokens into the history without playing them.
    ///
    /// Used when the feed resends its move list. Returns how many entries
    /// were written.
    pub fn add_move_list_text(&mut self, text: &str, start_ply: usize) -> usize {
        let list = MoveList::parse(text, start_ply);
        let written = self.history.merge(&list);
        debug!("{}: merged {} of {} tokens", self.name, written, list.len());
        written
    }

    // ===========================
    // Cursor navigation
    // ===========================

    /// Move the cursor to `ply`. Only plies with a known position qualify.
    pub fn set_cursor(&mut self, ply: usize) -> bool {
        if self.history.get(ply).is_some_and(HistoryEntry::is_applied) {
            self.cursor = Some(ply);
            true
        } else {
            false
        }
    }

    /// Back to the loaded snapshot, before the first recorded move.
    pub fn first(&mut self) -> bool {
        let moved = self.cursor.is_some();
        self.cursor = None;
        moved
    }

    pub fn last(&mut self) -> bool {
        let last = self.history.applied_plies().next_back();
        let moved = last.is_some() && last != self.cursor;
        if last.is_some() {
            self.cursor = last;
        }
        moved
    }

    pub fn prev(&mut self) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };
        self.cursor = self.history.applied_plies().rev().find(|&ply| ply < current);
        true
    }

    pub fn next(&mut self) -> bool {
        let next = match self.cursor {
            Some(current) => self.history.applied_plies().find(|&ply| ply > current),
            None => self.history.applied_plies().next(),
        };
        match next {
            Some(ply) => {
                self.cursor = Some(ply);
                true
            }
            None => false,
        }
    }

    /// Snapshot at the cursor.
    pub fn cursor_fen(&self) -> Option<&str> {
        match self.cursor {
            Some(ply) => self.history.get(ply).and_then(|e| e.fen.as_deref()),
            None => Some(&self.initial_fen),
        }
    }

    /// Diagram of the position at the cursor.
    pub fn render_at_cursor(&self) -> Option<String> {
        let snapshot = self.cursor_fen()?;
        let position = fen::decode(snapshot).ok()?;
        Some(render(&position, self.config))
    }
}

/// The live and archive controllers of one viewer.
///
/// Each board is mutated on its own; the other is only ever handed out as a
/// shared reference for lookups.
#[derive(Debug, Clone)]
pub struct DualBoard {
    live: BoardController,
    archive: BoardController,
}

impl Default for DualBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl DualBoard {
    pub fn new() -> Self {
        Self {
            live: BoardController::new(BoardId::Live),
            archive: BoardController::new(BoardId::Archive),
        }
    }

    pub fn board(&self, id: BoardId) -> &BoardController {
        match id {
            BoardId::Live => &self.live,
            BoardId::Archive => &self.archive,
        }
    }

    pub fn board_mut(&mut self, id: BoardId) -> &mut BoardController {
        match id {
            BoardId::Live => &mut self.live,
            BoardId::Archive => &mut self.archive,
        }
    }

    /// The board linked to `id`.
    pub fn companion(&self, id: BoardId) -> &BoardController {
        self.board(id.other())
    }

    /// Snapshot recorded at `ply` on the companion of `id`.
    pub fn companion_fen_at(&self, id: BoardId, ply: usize) -> Option<&str> {
        self.board(id)
            .lookup_in(self.companion(id), ply)
            .and_then(|entry| entry.fen.as_deref())
    }

    /// Load the live board's position at `ply` onto the archive board.
    ///
    /// # Returns
    ///
    /// `Ok(false)` when the live board has no position for that ply.
    pub fn sync_archive_from_live(&mut self, ply: usize) -> Result<bool, FenError> {
        let Some(snapshot) = self.live.history.get(ply).and_then(|e| e.fen.as_deref()) else {
            return Ok(false);
        };
        self.archive.load(snapshot, true)?;
        Ok(true)
    }
}
