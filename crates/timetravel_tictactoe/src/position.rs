//! Named board cells and their coordinate labels.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Column letters used in coordinate labels, left to right.
const COLUMN_LETTERS: [char; 3] = ['a', 'b', 'c'];

/// A position on the tic-tac-toe board (0-8).
///
/// Index `i` maps to `row = i / 3` and `col = i % 3`, both zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / Board::SIZE
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % Board::SIZE
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= Board::SIZE || col >= Board::SIZE {
            return None;
        }
        Self::from_index(row * Board::SIZE + col)
    }

    /// Column letter plus one-based row, e.g. `b2` for the center.
    pub fn coordinate(self) -> String {
        format!("{}{}", COLUMN_LETTERS[self.col()], self.row() + 1)
    }

    /// Parses a coordinate such as `a3` (case-insensitive).
    #[instrument]
    pub fn from_coordinate(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let letter = chars.next()?.to_ascii_lowercase();
        let digit = chars.next()?.to_digit(10)? as usize;
        if chars.next().is_some() || digit == 0 {
            return None;
        }
        let col = COLUMN_LETTERS.iter().position(|c| *c == letter)?;
        Self::from_row_col(digit - 1, col)
    }

    /// Parses either a board index (`0`-`8`) or a coordinate (`a1`-`c3`).
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => Self::from_coordinate(s),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coordinate())
    }
}
