//! Monotonic board invariant: each snapshot adds exactly one mark to its predecessor.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every snapshot after the start extends the previous one by one mark.
///
/// The recorded position was empty before the move and is occupied after it,
/// and no other square changed. Marks are never removed or overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().moves().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.position() else {
                return false;
            };
            let Square::Occupied(player) = after.board().get(pos) else {
                return false;
            };
            before.board().is_empty(pos) && before.board().with_mark(pos, player) == *after.board()
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = GameController::new();
        for cell in [4, 0, 8] {
            game.play_cell(cell).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(game.state()));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = GameController::new();
        game.play_cell(4).unwrap();
        game.play_cell(0).unwrap();

        let mut state = game.state().clone();
        state.history.moves[2]
            .board
            .set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_missing_position_violates() {
        let mut game = GameController::new();
        game.play_cell(4).unwrap();

        let mut state = game.state().clone();
        state.history.moves[1].position = None;
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
