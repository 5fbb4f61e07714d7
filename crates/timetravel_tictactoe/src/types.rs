//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the player whose turn it is after `moves_played` moves.
    ///
    /// X moves on even counts, O on odd ones.
    pub fn to_move_after(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of squares on a side.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Counts the occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board with row numbers down the side and column letters
/// along the bottom, matching move labels such as `b2`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::SIZE {
            write!(f, "{} ", row + 1)?;
            for col in 0..Self::SIZE {
                let symbol = match self.squares[row * Self::SIZE + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, "{symbol}")?;
                if col + 1 < Self::SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_move_alternates_from_x() {
        assert_eq!(Player::to_move_after(0), Player::X);
        assert_eq!(Player::to_move_after(1), Player::O);
        assert_eq!(Player::to_move_after(8), Player::X);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let marked = board.with_mark(Position::Center, Player::O);
        assert!(board.is_empty(Position::Center));
        assert_eq!(marked.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(marked.occupied(), 1);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::BottomRight, Player::O);
        assert_eq!(board.to_string(), "1 X . .\n2 . . .\n3 . . O\n  a b c");
    }
}
