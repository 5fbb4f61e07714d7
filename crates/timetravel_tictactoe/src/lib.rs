//! Tic-tac-toe with move history and time travel.
//!
//! This crate is the pure logic layer of the game. It knows nothing about
//! rendering: a presentation layer reads a [`GameView`] and sends
//! [`Intent`]s back to a [`GameController`].
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] maps a board snapshot to a [`WinResult`]
//! - **State**: [`GameState`] holds the [`History`] of snapshots, the cursor
//!   into it and the move-list [`SortOrder`]
//! - **Controller**: [`GameController`] applies plays, jumps and sort changes
//! - **View**: [`GameView`] is the immutable frame handed to the renderer
//! - **Invariants**: [`GameInvariants`] documents and checks what every
//!   reachable state satisfies
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameController, Player};
//!
//! let mut game = GameController::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.play_cell(cell).unwrap();
//! }
//! assert_eq!(game.view().winner, Some(Player::X));
//!
//! // Travel back and branch; the old future is discarded.
//! game.jump_to(2).unwrap();
//! game.play_cell(8).unwrap();
//! assert_eq!(game.state().history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Intent, IntentOutcome, MoveError};
pub use controller::GameController;
pub use history::{History, Move};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use rules::{WinResult, evaluate};
pub use state::{GameState, GameStatus, SortOrder};
pub use types::{Board, Player, Square};
pub use view::{GAME_START_LABEL, GameView, MoveEntry, move_label};
