//! Alternating turn invariant: X and O take turns, X first.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the mark placed by move `k` belongs to the player due after `k - 1` moves.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .moves()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, mv)| {
                mv.position()
                    .and_then(|pos| mv.board().get(pos).player())
                    .is_some_and(|player| player == Player::to_move_after(k - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
