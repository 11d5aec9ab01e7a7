//! gridtoe - terminal frontend
//!
//! Validates the game setup, then feeds lines from stdin to the engine as
//! clicks and prints the board after each one.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::TermConfig;
use gridtoe::TicTacToe;
use input::Command;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// How the board is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Text { colour: bool },
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = TermConfig::load_or_default(&cli.config)?;
    let setup = config
        .resolve_setup(&cli)
        .context("Cannot start game")?;

    let game = match config.resolve_seed(&cli) {
        Some(seed) => TicTacToe::with_seed(setup, seed),
        None => TicTacToe::new(setup),
    };

    let output = if cli.json {
        Output::Json
    } else {
        Output::Text {
            colour: !cli.no_colour,
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(game, stdin.lock(), stdout.lock(), output)
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,gridtoe=debug";

/// Logs go to stderr so stdout carries only the board.
fn initialize_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the input loop until `quit` or end of input.
#[instrument(skip_all, fields(size = %game.size(), mode = %game.mode()))]
fn run<R: Rng>(
    mut game: TicTacToe<R>,
    reader: impl BufRead,
    mut out: impl Write,
    output: Output,
) -> Result<()> {
    info!("Game loop started");
    draw(&game, &mut out, output)?;

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        match input::parse_command(&line) {
            Command::Quit => break,
            Command::Restart => {
                game.restart();
                draw(&game, &mut out, output)?;
            }
            Command::Click(pos) => match game.play_turn(pos) {
                Ok(turn) => {
                    debug!(
                        human = %turn.human,
                        ai = ?turn.ai,
                        status = %turn.status,
                        "Turn played"
                    );
                    draw(&game, &mut out, output)?;
                }
                Err(e) => debug!(error = %e, %pos, "Click ignored"),
            },
            Command::Ignored => debug!(line = %line, "Unrecognised input"),
        }
    }

    info!("Game loop finished");
    Ok(())
}

fn draw<R>(game: &TicTacToe<R>, out: &mut impl Write, output: Output) -> Result<()> {
    let view = game.snapshot();
    match output {
        Output::Text { colour } => write!(out, "{}", render::render(&view, colour))?,
        Output::Json => writeln!(out, "{}", serde_json::to_string(&view)?)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe::{BoardSize, GameMode, GameSetup};
    use std::io::Cursor;

    fn game(mode: GameMode) -> TicTacToe {
        TicTacToe::with_seed(GameSetup::new(BoardSize::new(3).unwrap(), mode), 11)
    }

    fn play(mode: GameMode, script: &str, output: Output) -> String {
        let mut out = Vec::new();
        run(game(mode), Cursor::new(script), &mut out, output).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_log_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing::level_filters::LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_run_to_win() {
        let text = play(
            GameMode::PlayerVsPlayer,
            "0 0\n1 1\n0 1\n2 2\n0 2\n",
            Output::Text { colour: false },
        );
        assert!(text.ends_with("X wins!\n"));
        assert!(text.contains("[X][X][X]"));
    }

    #[test]
    fn test_invalid_clicks_are_ignored() {
        let text = play(
            GameMode::PlayerVsPlayer,
            "1 1\n1 1\n9 9\nhello\n",
            Output::Text { colour: false },
        );
        // Initial board plus one accepted move.
        assert_eq!(text.matches("to move").count(), 2);
        assert!(text.ends_with("O to move\n"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let text = play(
            GameMode::PlayerVsPlayer,
            "q\n1 1\n",
            Output::Text { colour: false },
        );
        assert_eq!(text.matches("to move").count(), 1);
    }

    #[test]
    fn test_restart_redraws_empty_board() {
        let text = play(
            GameMode::PlayerVsAi,
            "1 1\nr\n",
            Output::Text { colour: false },
        );
        assert!(text.ends_with(" 0  .  .  . \n 1  .  .  . \n 2  .  .  . \nX to move\n"));
    }

    #[test]
    fn test_json_output() {
        let text = play(GameMode::PlayerVsAi, "0 0\n", Output::Json);
        let last = text.lines().last().unwrap();
        let view: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(view["size"], 3);
        assert_eq!(view["rows"][0][0]["player"], "X");
    }
}
