//! Board snapshots and the branching move history.
//!
//! History is a plain vector of snapshots. Playing from an earlier point
//! truncates everything after it before appending, so an overwritten future
//! is gone for good; there is no redo tree.

use super::position::Position;
use super::types::Board;
use serde::Serialize;
use tracing::{debug, instrument};

/// One entry in the history: a board snapshot and the cell played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub(crate) board: Board,
    pub(crate) position: Option<Position>,
}

impl Move {
    /// The game start: an empty board with no position.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// A snapshot reached by playing at `position`.
    pub fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell played to reach this snapshot (`None` for the start).
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Ordered sequence of snapshots, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    pub(crate) moves: Vec<Move>,
}

impl History {
    /// Creates a history holding only the game start.
    pub fn new() -> Self {
        Self {
            moves: vec![Move::start()],
        }
    }

    /// Number of snapshots, including the game start.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always `false`: the game start is never removed.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// Returns all snapshots in chronological order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Keeps `history[0..=from]`, appends `next`, and returns its index.
    ///
    /// Any snapshots after `from` are discarded.
    #[instrument(skip(self, next), fields(len = self.moves.len()))]
    pub fn branch(&mut self, from: usize, next: Move) -> usize {
        let discarded = self.moves.len().saturating_sub(from + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.moves.truncate(from + 1);
        self.moves.push(next);
        self.moves.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
