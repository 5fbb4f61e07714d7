//! Rooted history invariant: the game start is kept and the cursor points into history.

use super::super::{GameState, Move};
use super::Invariant;

/// Invariant: history starts at the empty board and the cursor is in bounds.
///
/// The first snapshot is always the empty board with no position, and
/// `current_move` always names an existing snapshot.
pub struct HistoryRootedInvariant;

impl Invariant<GameState> for HistoryRootedInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history.get(0) == Some(&Move::start()) && state.current_move() < history.len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the cursor is within it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryRootedInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut state = GameState::new();
        state.current_move = 1;
        assert!(!HistoryRootedInvariant::holds(&state));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = GameController::new();
        game.play_cell(0).unwrap();

        let mut state = game.state().clone();
        state.history.moves[0].board = state.history.moves[0]
            .board
            .with_mark(Position::Center, Player::O);
        assert!(!HistoryRootedInvariant::holds(&state));
    }
}
