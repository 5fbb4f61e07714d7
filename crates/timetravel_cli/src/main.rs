//! Tic-tac-toe with time travel - terminal front end.
//!
//! Renders the game view as text and forwards typed commands to the
//! controller. All game rules live in `timetravel_tictactoe`.

#![warn(missing_docs)]

mod cli;
mod input;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use timetravel_tictactoe::{GameController, SortOrder};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Play { sort } => run_play(sort),
        Command::Replay {
            commands,
            sort,
            json,
        } => run_replay(&commands, sort, json),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(sort: SortOrder) -> Result<()> {
    info!("Starting interactive game");
    let mut game = GameController::with_sort_order(sort);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::play(&mut game, stdin.lock(), stdout.lock())
}

/// Apply scripted commands and print the final frame
#[instrument(skip(commands), fields(count = commands.len()))]
fn run_replay(commands: &[String], sort: SortOrder, json: bool) -> Result<()> {
    let mut game = GameController::with_sort_order(sort);
    let accepted = session::replay(&mut game, commands)?;
    info!(accepted, total = commands.len(), "Replay finished");

    let view = game.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render::render(&view));
    }
    Ok(())
}
