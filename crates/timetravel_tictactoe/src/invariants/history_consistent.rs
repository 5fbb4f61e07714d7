//! History consistency invariant: snapshot index matches occupied squares.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: snapshot `k` has exactly `k` occupied squares, and no snapshot follows a win.
///
/// Every move in history corresponds to exactly one occupied square, and a
/// won board is always the last entry of its timeline.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let moves = state.history().moves();
        let counts_match = moves
            .iter()
            .enumerate()
            .all(|(k, mv)| mv.board().occupied() == k);
        let win_is_last = moves
            .iter()
            .rev()
            .skip(1)
            .all(|mv| rules::check_winner(mv.board()).is_none());
        counts_match && win_is_last
    }

    fn description() -> &'static str {
        "History length matches occupied squares and nothing follows a win"
    }
}
