//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// When a board completes more than one line, the earliest line here wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of evaluating a board: the winner and the line they completed.
///
/// A winner always comes with its line, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WinResult {
    line: Option<(Player, [Position; 3])>,
}

impl WinResult {
    /// A result with no winner.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.line.map(|(player, _)| player)
    }

    /// Returns the winning line, empty when there is no winner.
    pub fn winning_line(&self) -> &[Position] {
        match &self.line {
            Some((_, line)) => line,
            None => &[],
        }
    }
}

/// Evaluates the board against every winning line.
///
/// Returns the first completed line in [`LINES`] order, or a result with no
/// winner. Total over all boards, including full boards with no winner.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return WinResult {
                line: Some((player, line)),
            };
        }
    }

    WinResult::none()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}
