//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from board storage so the controller, the view
//! projection and the invariants can all share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, check_winner, evaluate};
