//! Authoritative game state: history, cursor, and move-list order.

use super::history::{History, Move};
use super::rules;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Display order for the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum SortOrder {
    /// Chronological, game start first.
    #[default]
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    /// Reverse-chronological, latest move first.
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl SortOrder {
    /// Human-readable description for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "First to last",
            Self::Descending => "Last to first",
        }
    }
}

/// Status of the snapshot under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum GameStatus {
    /// No line completed; the given player moves next.
    #[display("Next player: {_0}")]
    InProgress(Player),
    /// The given player completed a line.
    #[display("Winner: {_0}")]
    Won(Player),
}

/// Complete game state for one session.
///
/// The player to move is derived from the cursor's parity and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game at the start position.
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            sort_order,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the snapshot currently shown.
    pub fn current(&self) -> &Move {
        &self.history.moves()[self.current_move]
    }

    /// Returns the board currently shown.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the player to move from the current snapshot.
    pub fn next_player(&self) -> Player {
        Player::to_move_after(self.current_move)
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns the status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        match rules::check_winner(self.board()) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress(self.next_player()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
