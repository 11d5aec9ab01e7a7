//! Render snapshot handed to frontends.

use super::{GameStatus, Player, TicTacToe};
use serde::Serialize;

/// One cell as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Mark in the cell, if any.
    pub player: Option<Player>,
    /// True if the cell is part of the winning run.
    pub winning: bool,
    /// Colour of the mark, as a hex string.
    pub colour: Option<&'static str>,
}

/// Everything needed to draw the board and its status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Board edge length.
    pub size: usize,
    /// Cells by row, then column.
    pub rows: Vec<Vec<CellView>>,
    /// Game status.
    pub status: GameStatus,
    /// Status line, e.g. `X wins!` or `Draw!`.
    pub status_text: String,
}

impl BoardView {
    pub(crate) fn of<R>(game: &TicTacToe<R>) -> Self {
        let size = game.size().get();
        let winning = game.status().winning_cells();
        let mut rows = vec![Vec::with_capacity(size); size];
        for (pos, square) in game.board().iter() {
            let player = square.player();
            rows[pos.row].push(CellView {
                player,
                winning: winning.contains(&pos),
                colour: player.map(Player::colour_hex),
            });
        }
        Self {
            size,
            rows,
            status: game.status().clone(),
            status_text: game.status_text(),
        }
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        self.rows.get(row)?.get(col)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoardSize, GameMode, GameSetup, Player, Position, TicTacToe};

    #[test]
    fn test_snapshot_marks_winning_cells() {
        let setup = GameSetup::new(BoardSize::new(4).unwrap(), GameMode::PlayerVsPlayer);
        let mut game = TicTacToe::with_seed(setup, 0);
        for pos in [(0, 1), (1, 1), (0, 2), (2, 2), (0, 3)] {
            game.play_turn(Position::from(pos)).unwrap();
        }
        let view = game.snapshot();
        assert_eq!(view.status_text, "X wins!");
        assert!(view.cell(0, 1).unwrap().winning);
        assert!(view.cell(0, 3).unwrap().winning);
        assert!(!view.cell(0, 0).unwrap().winning);
        assert!(!view.cell(1, 1).unwrap().winning);
        assert_eq!(view.cell(1, 1).unwrap().player, Some(Player::O));
        assert_eq!(view.cell(1, 1).unwrap().colour, Some("#00ADB5"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let setup = GameSetup::new(BoardSize::new(3).unwrap(), GameMode::PlayerVsPlayer);
        let game = TicTacToe::with_seed(setup, 0);
        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["size"], 3);
        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["status_text"], "X to move");
    }
}
