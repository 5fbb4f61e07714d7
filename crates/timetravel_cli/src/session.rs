//! Drives a game controller from lines of player input.

use super::input::{HELP, Input};
use super::render::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use timetravel_tictactoe::{GameController, Intent};
use tracing::{debug, info, instrument, warn};

/// Applies an intent, treating a rejection as a silent no-op.
///
/// Returns whether the state changed.
#[instrument(skip(game))]
pub fn apply(game: &mut GameController, intent: Intent) -> bool {
    match game.dispatch(intent) {
        Ok(outcome) => {
            debug!(%outcome, "Intent accepted");
            true
        }
        Err(err) => {
            info!(error = %err, "Intent ignored");
            false
        }
    }
}

/// Runs an interactive game until `quit` or end of input.
///
/// Rejected moves are ignored the way a click on a filled square is; only
/// unparseable input gets a message.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    game: &mut GameController,
    input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{}", render(&game.view()))?;
    writeln!(output, "Type 'help' for commands.")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match line.parse::<Input>() {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(output, "{HELP}")?,
            Ok(Input::Show) => writeln!(output, "{}", render(&game.view()))?,
            Ok(Input::Intent(intent)) => {
                if apply(game, intent) {
                    writeln!(output, "{}", render(&game.view()))?;
                }
            }
            Err(err) => {
                warn!(%line, error = %err, "Unrecognized input");
                writeln!(output, "{err}")?;
            }
        }
        prompt(&mut output)?;
    }

    writeln!(output)?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

/// Parses and applies scripted commands in order, returning how many were accepted.
///
/// # Errors
///
/// Fails on the first command that does not parse as an intent.
#[instrument(skip(game))]
pub fn replay(game: &mut GameController, commands: &[String]) -> Result<usize> {
    let mut accepted = 0;
    for command in commands {
        let input = command
            .parse::<Input>()
            .with_context(|| format!("Invalid command '{command}'"))?;
        let Input::Intent(intent) = input else {
            anyhow::bail!("'{command}' is not a move, jump or sort command");
        };
        if apply(game, intent) {
            accepted += 1;
        }
    }
    Ok(accepted)
}
