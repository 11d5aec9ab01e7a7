//! Command-line interface for gridtoe.

use clap::Parser;
use std::path::PathBuf;

/// gridtoe - tic-tac-toe on boards from 3×3 to 10×10
///
/// Enter moves as `row col` (zero-based). `r` restarts, `q` quits.
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Tic-tac-toe on an N×N board, three in a row wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board edge length, 3 to 10
    #[arg(short, long)]
    pub size: Option<String>,

    /// Game mode: 1 = player vs player, 2 = player vs AI
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Query string such as "?size=5&mode=2"; overrides --size and --mode
    #[arg(short, long)]
    pub query: Option<String>,

    /// Path to a TOML config file (used if it exists)
    #[arg(short, long, default_value = "gridtoe.toml")]
    pub config: PathBuf,

    /// Seed for the AI's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the board as JSON instead of a coloured grid
    #[arg(long)]
    pub json: bool,

    /// Disable colours
    #[arg(long)]
    pub no_colour: bool,
}
