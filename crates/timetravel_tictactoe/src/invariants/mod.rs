//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](crate::GameState). The controller checks them after each
//! accepted move in debug builds; tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod history_consistent;
pub mod history_rooted;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use history_rooted::HistoryRootedInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    HistoryRootedInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, GameState, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameController::new();
        for cell in [0, 4, 8, 2] {
            game.play_cell(cell).unwrap();
        }
        game.jump_to(1).unwrap();
        game.play_cell(6).unwrap();
        assert!(GameInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameController::new();
        game.play_cell(4).unwrap();

        let mut state = game.state().clone();
        state.history.moves[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryRootedInvariant, MonotonicBoardInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
