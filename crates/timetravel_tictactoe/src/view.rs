//! Read-only projection of the game state for rendering.

use super::position::Position;
use super::rules;
use super::state::{GameState, GameStatus, SortOrder};
use super::types::{Player, Square};
use serde::Serialize;

/// Label of the history entry for the game start.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Display label for history entry `index` reached by playing at `position`.
pub fn move_label(index: usize, position: Option<Position>) -> String {
    match position {
        Some(pos) if index > 0 => format!("Go to move #{index} ({})", pos.coordinate()),
        _ => GAME_START_LABEL.to_string(),
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index to jump to. Unaffected by display order.
    pub index: usize,
    /// Text for the jump button.
    pub label: String,
    /// True for the snapshot currently shown.
    pub is_current: bool,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Squares of the current snapshot in row-major order.
    pub squares: [Square; 9],
    /// Squares to highlight: empty, or the three cells of the winning line.
    pub winning_line: Vec<Position>,
    /// Winner of the current snapshot.
    pub winner: Option<Player>,
    /// Current snapshot is full with no winner.
    pub is_draw: bool,
    /// `Winner: X` or `Next player: O` style status line.
    pub status: String,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Order the move list is shown in.
    pub sort_order: SortOrder,
}

impl GameView {
    /// Builds the view for the snapshot under the cursor.
    pub fn project(state: &GameState) -> Self {
        let board = state.board();
        let result = rules::evaluate(board);
        let status = match result.winner() {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress(state.next_player()),
        };

        let mut moves: Vec<MoveEntry> = state
            .history()
            .moves()
            .iter()
            .enumerate()
            .map(|(index, mv)| MoveEntry {
                index,
                label: move_label(index, mv.position()),
                is_current: index == state.current_move(),
            })
            .collect();
        if state.sort_order() == SortOrder::Descending {
            moves.reverse();
        }

        Self {
            squares: *board.squares(),
            winning_line: result.winning_line().to_vec(),
            winner: result.winner(),
            is_draw: rules::is_draw(board),
            status: status.to_string(),
            moves,
            sort_order: state.sort_order(),
        }
    }

    /// Checks whether the square at `pos` should be highlighted.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }

    /// Returns the square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }
}
