//! Winning-run invariant: a recorded win is a real straight run.

use super::super::rules::{Line, WIN_LENGTH};
use super::super::{GameStatus, Square, TicTacToe};
use super::Invariant;

/// Invariant: a `Won` status names exactly `WIN_LENGTH` on-board cells, all
/// held by the winner, each one step after the previous along a single
/// line direction.
pub struct WinningRunInvariant;

impl<R> Invariant<TicTacToe<R>> for WinningRunInvariant {
    fn holds(game: &TicTacToe<R>) -> bool {
        let GameStatus::Won { winner, cells } = game.status() else {
            return true;
        };
        let size = game.size().get();
        let owned = cells
            .iter()
            .all(|&c| game.board().get(c) == Some(Square::Occupied(*winner)));
        let straight = Line::SCAN_ORDER.iter().any(|line| {
            cells
                .windows(2)
                .all(|pair| pair[0].step(line.direction(), size) == Some(pair[1]))
        });
        cells.len() == WIN_LENGTH && owned && straight
    }

    fn description() -> &'static str {
        "Winning cells form a straight run of the winner's marks"
    }
}
