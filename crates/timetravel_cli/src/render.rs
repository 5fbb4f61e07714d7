//! Text rendering of a game view.

use std::fmt;
use timetravel_tictactoe::{Board, GameView, Player, Position, Square};

/// Renders one cell, bracketing squares on the winning line.
fn render_square(view: &GameView, pos: Position) -> String {
    let symbol = match view.square(pos) {
        Square::Empty => ' ',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    };
    if view.is_highlighted(pos) {
        format!("[{symbol}]")
    } else {
        format!(" {symbol} ")
    }
}

/// A full text frame: board, status line and move list.
pub struct Frame<'a>(pub &'a GameView);

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "   a   b   c")?;
        for row in 0..Board::SIZE {
            let cells: Vec<String> = (0..Board::SIZE)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| render_square(view, pos))
                .collect();
            writeln!(f, "{} {}", row + 1, cells.join("|"))?;
            if row + 1 < Board::SIZE {
                writeln!(f, "  ---+---+---")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", view.status)?;
        if view.is_draw {
            writeln!(f, "Board is full")?;
        }

        writeln!(f, "Moves ({}):", view.sort_order.label())?;
        for entry in &view.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            writeln!(f, "{marker} {}. {}", entry.index, entry.label)?;
        }
        Ok(())
    }
}

/// Renders the board, status line and move list.
pub fn render(view: &GameView) -> String {
    Frame(view).to_string()
}
