//! Filled-count invariant: the running count matches the board.

use super::super::TicTacToe;
use super::Invariant;

/// Invariant: the filled count equals both the number of occupied squares
/// and the number of recorded moves.
///
/// Draw detection relies on the running count, so a drift here would end
/// games early or never.
pub struct FilledCountInvariant;

impl<R> Invariant<TicTacToe<R>> for FilledCountInvariant {
    fn holds(game: &TicTacToe<R>) -> bool {
        let occupied = game.board().occupied_count();
        occupied == game.filled() && occupied == game.history().len()
    }

    fn description() -> &'static str {
        "Filled count matches occupied squares and move history"
    }
}
