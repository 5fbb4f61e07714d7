//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use timetravel_tictactoe::SortOrder;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading one command per line from stdin
    Play {
        /// Initial move-list order (asc or desc)
        #[arg(long, default_value_t)]
        sort: SortOrder,
    },

    /// Apply a scripted list of commands and print the final frame
    Replay {
        /// Commands such as "4", "b2", "jump 2" or "sort desc"
        #[arg(required = true)]
        commands: Vec<String>,

        /// Initial move-list order (asc or desc)
        #[arg(long, default_value_t)]
        sort: SortOrder,

        /// Print the final view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "tictactoe", "replay", "0", "jump 1", "--sort", "desc", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Replay {
                commands,
                sort,
                json,
            } => {
                assert_eq!(commands, vec!["0", "jump 1"]);
                assert_eq!(sort, SortOrder::Descending);
                assert!(json);
            }
            Command::Play { .. } => panic!("Expected replay"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_play_defaults_to_ascending() {
        let cli = Cli::try_parse_from(["tictactoe", "--log-level", "debug", "play"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play {
                sort: SortOrder::Ascending
            }
        ));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_replay_requires_commands() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }
}
