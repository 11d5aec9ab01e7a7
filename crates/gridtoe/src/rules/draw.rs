//! Draw detection.

use super::super::Board;

/// A draw is a full board with no winner recorded.
///
/// `filled` is the caller's running count of accepted moves, which must
/// equal the number of occupied squares.
pub fn is_draw(board: &Board, filled: usize, has_winner: bool) -> bool {
    filled == board.size().cells() && !has_winner
}
