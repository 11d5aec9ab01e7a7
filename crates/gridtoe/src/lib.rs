//! gridtoe - tic-tac-toe on an N×N board
//!
//! Boards run from 3×3 to 10×10, and three marks in a row win on every size.
//! Two modes are supported: two humans sharing the board, or a human (X)
//! against an opponent that plays a uniformly random empty square (O).
//!
//! # Architecture
//!
//! - **Setup**: validates raw `size`/`mode` input, including query strings
//! - **Engine**: [`TicTacToe`] owns the board, turn, status and RNG
//! - **Rules**: pure win and draw checks over a [`Board`]
//! - **Invariants**: properties re-checked after every move in debug builds
//! - **View**: [`BoardView`] snapshot for renderers
//!
//! # Example
//!
//! ```
//! use gridtoe::{GameSetup, Position, TicTacToe};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let setup = GameSetup::from_query("?size=3&mode=1")?;
//! let mut game = TicTacToe::with_seed(setup, 7);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.play_turn(Position::new(row, col))?;
//! }
//! assert_eq!(game.status_text(), "X wins!");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod setup;
mod status;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use ai::pick_random_empty_cell;
pub use engine::TicTacToe;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use position::Position;
pub use rules::{check_win, Line, WinResult, WIN_LENGTH};
pub use setup::{GameMode, GameSetup, SetupError};
pub use status::{GameStatus, Turn};
pub use types::{Board, BoardSize, Player, Square, MAX_SIZE, MIN_SIZE};
pub use view::{BoardView, CellView};
