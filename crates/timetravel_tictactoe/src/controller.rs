//! Game controller: applies user intents to the game state.
//!
//! Every rejected intent leaves the state exactly as it was. Accepted plays
//! branch the history at the cursor, so playing after a jump discards the
//! moves that used to follow it.

use super::action::{Intent, IntentOutcome, MoveError};
use super::history::Move;
use super::position::Position;
use super::rules;
use super::state::{GameState, SortOrder};
use super::view::GameView;
use tracing::{debug, info, instrument};

/// Owns the game state for one session and mutates it in response to intents.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a controller for a fresh game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        info!(%sort_order, "Starting new game");
        Self {
            state: GameState::with_sort_order(sort_order),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Projects the current state into immutable view data.
    pub fn view(&self) -> GameView {
        GameView::project(&self.state)
    }

    /// Plays the next mark at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past the board, and
    /// the errors of [`GameController::play`] otherwise.
    #[instrument(skip(self))]
    pub fn play_cell(&mut self, index: usize) -> Result<IntentOutcome, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(position)
    }

    /// Plays the next mark at `position` from the snapshot under the cursor.
    ///
    /// Any history after the cursor is discarded before the new snapshot is
    /// appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current snapshot already has a winner
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(current_move = self.state.current_move))]
    pub fn play(&mut self, position: Position) -> Result<IntentOutcome, MoveError> {
        let current = self.state.current();
        if let Some(winner) = rules::check_winner(current.board()) {
            debug!(%winner, "Rejecting move on finished game");
            return Err(MoveError::GameOver(winner));
        }
        if !current.board().is_empty(position) {
            debug!(%position, "Rejecting move on occupied square");
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.state.next_player();
        let next = Move::new(current.board().with_mark(position, player), position);
        let index = self.state.history.branch(self.state.current_move, next);
        self.state.current_move = index;
        debug!(%player, %position, index, "Move applied");

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(IntentOutcome::Played {
            player,
            position,
            index,
        })
    }

    /// Moves the cursor to history index `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoSuchMove`] if the index is past the end of history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<IntentOutcome, MoveError> {
        let len = self.state.history.len();
        if move_index >= len {
            debug!(move_index, len, "Rejecting jump outside history");
            return Err(MoveError::NoSuchMove {
                requested: move_index,
                len,
            });
        }
        self.state.current_move = move_index;
        debug!(move_index, next_player = %self.state.next_player(), "Cursor moved");
        Ok(IntentOutcome::Jumped(move_index))
    }

    /// Changes the move-list display order. History and cursor are untouched.
    #[instrument(skip(self))]
    pub fn set_moves_sort_order(&mut self, order: SortOrder) -> IntentOutcome {
        self.state.sort_order = order;
        IntentOutcome::Sorted(order)
    }

    /// Applies an intent from the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason of the underlying operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<IntentOutcome, MoveError> {
        match intent {
            Intent::PlayCell(position) => self.play(position),
            Intent::JumpTo(move_index) => self.jump_to(move_index),
            Intent::SetSortOrder(order) => Ok(self.set_moves_sort_order(order)),
        }
    }

    /// Logs every invariant the state no longer satisfies.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(&self.state) {
            for violation in violations {
                tracing::warn!(invariant = %violation.description, "Game invariant violated");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Player};

    #[test]
    fn test_first_move_is_x() {
        let mut game = GameController::new();
        let outcome = game.play_cell(4).unwrap();
        assert_eq!(
            outcome,
            IntentOutcome::Played {
                player: Player::X,
                position: Position::Center,
                index: 1
            }
        );
        assert_eq!(game.state().next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected_without_change() {
        let mut game = GameController::new();
        game.play_cell(4).unwrap();
        let before = game.state().clone();

        assert_eq!(
            game.play_cell(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_out_of_bounds_rejected_without_change() {
        let mut game = GameController::new();
        let before = game.state().clone();
        assert_eq!(game.play_cell(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(
            game.jump_to(1),
            Err(MoveError::NoSuchMove {
                requested: 1,
                len: 1
            })
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_won_game_rejects_moves() {
        let mut game = GameController::new();
        for cell in [0, 1, 4, 2, 8] {
            game.play_cell(cell).unwrap();
        }
        assert_eq!(game.state().status(), GameStatus::Won(Player::X));

        let before = game.state().clone();
        assert_eq!(game.play_cell(3), Err(MoveError::GameOver(Player::X)));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_jump_recomputes_next_player() {
        let mut game = GameController::new();
        for cell in [0, 1, 2] {
            game.play_cell(cell).unwrap();
        }
        game.jump_to(1).unwrap();
        assert_eq!(game.state().next_player(), Player::O);
        game.jump_to(0).unwrap();
        assert_eq!(game.state().next_player(), Player::X);
        assert_eq!(game.state().history().len(), 4);
    }

    #[test]
    fn test_jump_out_of_won_then_branch() {
        let mut game = GameController::new();
        for cell in [0, 1, 4, 2, 8] {
            game.play_cell(cell).unwrap();
        }
        game.jump_to(4).unwrap();
        assert_eq!(game.state().status(), GameStatus::InProgress(Player::X));

        game.play_cell(6).unwrap();
        assert_eq!(game.state().history().len(), 6);
        assert_eq!(game.state().current_move(), 5);
        assert_eq!(
            game.state().current().position(),
            Some(Position::BottomLeft)
        );
        assert!(game.state().board().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut game = GameController::new();
        game.dispatch(Intent::PlayCell(Position::Center)).unwrap();
        assert_eq!(
            game.dispatch(Intent::SetSortOrder(SortOrder::Descending)),
            Ok(IntentOutcome::Sorted(SortOrder::Descending))
        );
        assert_eq!(
            game.dispatch(Intent::JumpTo(0)),
            Ok(IntentOutcome::Jumped(0))
        );
        assert_eq!(game.state().sort_order(), SortOrder::Descending);
        assert_eq!(game.state().current_move(), 0);
    }
}
