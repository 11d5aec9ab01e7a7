//! Win detection.
//!
//! A move is checked by scanning the four full lines that pass through it:
//! its row, its column, and both diagonals. Each line is walked edge to edge
//! and the first run of [`WIN_LENGTH`] consecutive marks wins, whatever the
//! board size.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Marks in a row needed to win. Constant for every board size.
pub const WIN_LENGTH: usize = 3;

/// One of the four lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Line {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
    /// Top-left to bottom-right.
    PrimaryDiagonal,
    /// Top-right to bottom-left.
    SecondaryDiagonal,
}

impl Line {
    /// Scan order used by [`check_win`].
    pub const SCAN_ORDER: [Line; 4] = [
        Line::Row,
        Line::Column,
        Line::PrimaryDiagonal,
        Line::SecondaryDiagonal,
    ];

    /// Unit step along the line, as `(row, col)` deltas.
    pub fn direction(self) -> (isize, isize) {
        match self {
            Line::Row => (0, 1),
            Line::Column => (1, 0),
            Line::PrimaryDiagonal => (1, 1),
            Line::SecondaryDiagonal => (1, -1),
        }
    }

    /// First cell of this line through `pos` on a `size × size` board, or
    /// `None` if `pos` is off the board.
    pub fn start(self, pos: Position, size: usize) -> Option<Position> {
        match self {
            Line::Row => on_board(pos, size).then(|| Position::new(pos.row, 0)),
            Line::Column => on_board(pos, size).then(|| Position::new(0, pos.col)),
            Line::PrimaryDiagonal => primary_diagonal_start(pos, size),
            Line::SecondaryDiagonal => secondary_diagonal_start(pos, size),
        }
    }

    /// All cells of this line through `pos`, in scan order. Empty when `pos`
    /// is off the board.
    pub fn cells(self, pos: Position, size: usize) -> Vec<Position> {
        let dir = self.direction();
        std::iter::successors(self.start(pos, size), |p| p.step(dir, size)).collect()
    }
}

fn on_board(pos: Position, size: usize) -> bool {
    pos.row < size && pos.col < size
}

/// Walks from `pos` toward `(0, 0)` until either coordinate reaches 0.
pub fn primary_diagonal_start(pos: Position, size: usize) -> Option<Position> {
    if !on_board(pos, size) {
        return None;
    }
    let back = pos.row.min(pos.col);
    Some(Position::new(pos.row - back, pos.col - back))
}

/// Walks from `pos` toward the top-right corner until the top row or the
/// last column is reached.
pub fn secondary_diagonal_start(pos: Position, size: usize) -> Option<Position> {
    if !on_board(pos, size) {
        return None;
    }
    let back = pos.row.min(size - 1 - pos.col);
    Some(Position::new(pos.row - back, pos.col + back))
}

/// Outcome of checking a move for a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    /// No line through the move holds a winning run.
    NoWin,
    /// A winning run, in scan order.
    Win {
        /// The first [`WIN_LENGTH`] cells of the run.
        cells: [Position; WIN_LENGTH],
    },
}

impl WinResult {
    /// Returns true for a win.
    pub fn is_win(&self) -> bool {
        matches!(self, WinResult::Win { .. })
    }

    /// Winning cells, empty when there is no win.
    pub fn cells(&self) -> &[Position] {
        match self {
            WinResult::NoWin => &[],
            WinResult::Win { cells } => cells,
        }
    }
}

/// Checks the four lines through `pos` for a run of `player`'s marks.
///
/// Lines are tried row, column, primary diagonal, secondary diagonal; the
/// first line containing a run wins. The run may lie anywhere on the line,
/// it need not include `pos`.
#[instrument(skip(board), fields(size = board.size().get()))]
pub fn check_win(board: &Board, pos: Position, player: Player) -> WinResult {
    if !board.contains(pos) {
        return WinResult::NoWin;
    }
    let size = board.size().get();
    for line in Line::SCAN_ORDER {
        if let Some(cells) = scan_line(board, &line.cells(pos, size), player) {
            debug!(%line, ?cells, %player, "Winning run found");
            return WinResult::Win { cells };
        }
    }
    WinResult::NoWin
}

/// Returns the first `WIN_LENGTH` cells of the first run of `player` marks.
fn scan_line(board: &Board, line: &[Position], player: Player) -> Option<[Position; WIN_LENGTH]> {
    let mut run: Vec<Position> = Vec::with_capacity(WIN_LENGTH);
    for &cell in line {
        if board.get(cell) == Some(Square::Occupied(player)) {
            run.push(cell);
            if run.len() == WIN_LENGTH {
                return run.try_into().ok();
            }
        } else {
            run.clear();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;

    fn board(n: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(BoardSize::new(n).unwrap());
        for &(r, c, p) in marks {
            board.set(Position::new(r, c), Square::Occupied(p));
        }
        board
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = board(3, &[]);
        assert_eq!(check_win(&board, Position::new(1, 1), Player::X), WinResult::NoWin);
    }

    #[test]
    fn test_primary_diagonal_start() {
        let start = |r, c, n| primary_diagonal_start(Position::new(r, c), n);
        assert_eq!(start(0, 0, 3), Some(Position::new(0, 0)));
        assert_eq!(start(3, 5, 7), Some(Position::new(0, 2)));
        assert_eq!(start(6, 2, 7), Some(Position::new(4, 0)));
    }

    #[test]
    fn test_secondary_diagonal_start() {
        let start = |r, c| secondary_diagonal_start(Position::new(r, c), 5);
        assert_eq!(start(0, 2), Some(Position::new(0, 2)));
        assert_eq!(start(2, 2), Some(Position::new(0, 4)));
        assert_eq!(start(4, 1), Some(Position::new(1, 4)));
        assert_eq!(start(3, 4), Some(Position::new(3, 4)));
    }

    #[test]
    fn test_off_board_position_has_no_line() {
        assert_eq!(secondary_diagonal_start(Position::new(0, 5), 3), None);
        assert_eq!(primary_diagonal_start(Position::new(3, 0), 3), None);
        for line in Line::SCAN_ORDER {
            assert_eq!(line.start(Position::new(5, 0), 3), None);
            assert!(line.cells(Position::new(1, 4), 4).is_empty());
        }
    }

    #[test]
    fn test_diagonal_cells_cover_full_length() {
        let cells = Line::SecondaryDiagonal.cells(Position::new(2, 2), 5);
        assert_eq!(
            cells,
            vec![
                Position::new(0, 4),
                Position::new(1, 3),
                Position::new(2, 2),
                Position::new(3, 1),
                Position::new(4, 0),
            ]
        );
        let primary = |r, c| Line::PrimaryDiagonal.cells(Position::new(r, c), 4).len();
        assert_eq!(primary(1, 3), 2);
        assert_eq!(primary(1, 2), 3);
    }

    #[test]
    fn test_column_win() {
        let board = board(4, &[(1, 2, Player::O), (2, 2, Player::O), (3, 2, Player::O)]);
        let result = check_win(&board, Position::new(2, 2), Player::O);
        let expected = [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)];
        assert_eq!(result.cells(), &expected);
    }

    #[test]
    fn test_secondary_diagonal_win() {
        let board = board(5, &[(1, 3, Player::X), (2, 2, Player::X), (3, 1, Player::X)]);
        let result = check_win(&board, Position::new(3, 1), Player::X);
        let expected = [Position::new(1, 3), Position::new(2, 2), Position::new(3, 1)];
        assert_eq!(result.cells(), &expected);
    }

    #[test]
    fn test_broken_run_does_not_win() {
        let board = board(
            5,
            &[
                (0, 0, Player::X),
                (0, 1, Player::X),
                (0, 2, Player::O),
                (0, 3, Player::X),
            ],
        );
        assert!(!check_win(&board, Position::new(0, 3), Player::X).is_win());
    }

    #[test]
    fn test_row_checked_before_column() {
        let board = board(
            3,
            &[
                (0, 0, Player::X),
                (0, 1, Player::X),
                (0, 2, Player::X),
                (1, 0, Player::X),
                (2, 0, Player::X),
            ],
        );
        let result = check_win(&board, Position::new(0, 0), Player::X);
        let expected = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(result.cells(), &expected);
    }

    #[test]
    fn test_other_player_marks_ignored() {
        let board = board(3, &[(0, 0, Player::O), (0, 1, Player::O), (0, 2, Player::O)]);
        assert!(!check_win(&board, Position::new(0, 2), Player::X).is_win());
    }
}
