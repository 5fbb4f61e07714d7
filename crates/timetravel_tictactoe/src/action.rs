//! User intents and the errors they can be rejected with.
//!
//! Intents are what a presentation layer emits: a cell click, a jump in the
//! move list, or a change of move-list order. They carry no game logic and
//! can be logged or serialized before the controller applies them.

use super::position::Position;
use super::state::SortOrder;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// An action requested by the player through the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum Intent {
    /// Place the next mark at a cell.
    #[display("play {_0}")]
    PlayCell(Position),
    /// Move the cursor to a history index.
    #[display("jump {_0}")]
    JumpTo(usize),
    /// Change the move-list display order.
    #[display("sort {_0}")]
    SetSortOrder(SortOrder),
}

/// What an accepted intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum IntentOutcome {
    /// A mark was placed and became move `index`.
    #[display("{player} played {position} (move #{index})")]
    Played {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// History index of the new snapshot.
        index: usize,
    },
    /// The cursor moved to this history index.
    #[display("Jumped to move #{_0}")]
    Jumped(usize),
    /// The move list now uses this order.
    #[display("Sorted moves {}", _0.label().to_lowercase())]
    Sorted(SortOrder),
}

/// Reason an intent was rejected. The game state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The cell index is outside the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The history has no move with this index.
    #[display("No move #{requested} (history has {len} entries)")]
    NoSuchMove {
        /// Requested history index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
