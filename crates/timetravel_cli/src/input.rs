//! Parsing of typed player input into intents.

use std::str::FromStr;
use timetravel_tictactoe::{Intent, Position, SortOrder};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward an intent to the controller.
    Intent(Intent),
    /// Redraw the current frame.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Error for input that does not name a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// The cell is neither 0-8 nor a1-c3.
    #[display("Unknown cell '{_0}' (use 0-8 or a1-c3)")]
    UnknownCell(String),
    /// The move number is not a non-negative integer.
    #[display("Invalid move number '{_0}'")]
    InvalidMoveNumber(String),
    /// The sort order is neither asc nor desc.
    #[display("Unknown sort order '{_0}' (use asc or desc)")]
    UnknownSortOrder(String),
    /// A command word was given without its argument.
    #[display("'{_0}' needs an argument")]
    MissingArgument(&'static str),
    /// More words followed a complete command.
    #[display("Unexpected '{_0}' after command")]
    TrailingArgument(String),
    /// The first word is not a command.
    #[display("Unknown command '{_0}' (type 'help')")]
    Unknown(String),
}

impl std::error::Error for InputError {}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  <cell> | play <cell>   place the next mark (cell is 0-8 or a1-c3)
  jump <n>               go to move #n (0 is the game start)
  sort asc|desc          order the move list
  show                   redraw the board
  help                   show this text
  quit                   leave the game";

fn parse_cell(word: &str) -> Result<Intent, InputError> {
    Position::parse(word)
        .map(Intent::PlayCell)
        .ok_or_else(|| InputError::UnknownCell(word.to_string()))
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Err(InputError::Empty);
        };
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(InputError::TrailingArgument(extra.to_string()));
        }

        let input = match (first.to_ascii_lowercase().as_str(), arg) {
            ("quit" | "exit" | "q", _) => Input::Quit,
            ("help" | "?", _) => Input::Help,
            ("show", _) => Input::Show,
            ("play", Some(cell)) => Input::Intent(parse_cell(cell)?),
            ("play", None) => return Err(InputError::MissingArgument("play")),
            ("jump", Some(n)) => {
                let index = n
                    .parse::<usize>()
                    .map_err(|_| InputError::InvalidMoveNumber(n.to_string()))?;
                Input::Intent(Intent::JumpTo(index))
            }
            ("jump", None) => return Err(InputError::MissingArgument("jump")),
            ("sort", Some(order)) => {
                let order = SortOrder::from_str(order)
                    .map_err(|_| InputError::UnknownSortOrder(order.to_string()))?;
                Input::Intent(Intent::SetSortOrder(order))
            }
            ("sort", None) => return Err(InputError::MissingArgument("sort")),
            (_, None) if first.parse::<usize>().is_ok() || Position::parse(first).is_some() => {
                Input::Intent(parse_cell(first)?)
            }
            _ => return Err(InputError::Unknown(first.to_string())),
        };
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Input, InputError> {
        s.parse()
    }

    #[test]
    fn test_bare_cell() {
        assert_eq!(
            parse("4"),
            Ok(Input::Intent(Intent::PlayCell(Position::Center)))
        );
        assert_eq!(
            parse("a3"),
            Ok(Input::Intent(Intent::PlayCell(Position::BottomLeft)))
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse("play c1"),
            Ok(Input::Intent(Intent::PlayCell(Position::TopRight)))
        );
        assert_eq!(parse("jump 2"), Ok(Input::Intent(Intent::JumpTo(2))));
        assert_eq!(
            parse("SORT desc"),
            Ok(Input::Intent(Intent::SetSortOrder(SortOrder::Descending)))
        );
        assert_eq!(parse("q"), Ok(Input::Quit));
        assert_eq!(parse("show"), Ok(Input::Show));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("   "), Err(InputError::Empty));
        assert_eq!(parse("dance"), Err(InputError::Unknown("dance".to_string())));
        assert_eq!(
            parse("play z9"),
            Err(InputError::UnknownCell("z9".to_string()))
        );
        assert_eq!(
            parse("jump -1"),
            Err(InputError::InvalidMoveNumber("-1".to_string()))
        );
        assert_eq!(
            parse("sort up"),
            Err(InputError::UnknownSortOrder("up".to_string()))
        );
        assert_eq!(parse("jump"), Err(InputError::MissingArgument("jump")));
    }

    #[test]
    fn test_number_outside_board_is_unknown_cell() {
        assert_eq!(parse("9"), Err(InputError::UnknownCell("9".to_string())));
        assert_eq!(parse("42"), Err(InputError::UnknownCell("42".to_string())));
        assert_eq!(
            parse("9").unwrap_err().to_string(),
            "Unknown cell '9' (use 0-8 or a1-c3)"
        );
    }

    #[test]
    fn test_trailing_words_rejected() {
        assert_eq!(
            parse("jump 1 2"),
            Err(InputError::TrailingArgument("2".to_string()))
        );
        assert_eq!(
            parse("play 4 5"),
            Err(InputError::TrailingArgument("5".to_string()))
        );
        assert_eq!(
            parse("sort asc desc"),
            Err(InputError::TrailingArgument("desc".to_string()))
        );
    }
}
