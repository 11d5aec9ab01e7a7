//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Square, TicTacToe};
use super::Invariant;

/// Invariant: board squares are monotonic (never overwritten).
///
/// Verified by rebuilding the board from the move history and comparing.
pub struct MonotonicBoardInvariant;

impl<R> Invariant<TicTacToe<R>> for MonotonicBoardInvariant {
    fn holds(game: &TicTacToe<R>) -> bool {
        let mut reconstructed = Board::new(game.size());

        for mov in game.history() {
            if reconstructed.get(mov.position) != Some(Square::Empty) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
