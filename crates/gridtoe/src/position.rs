//! Grid coordinates.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A cell on the board, zero-based `(row, col)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps one cell in direction `(dr, dc)`.
    ///
    /// Returns `None` when the step would leave the `size × size` grid.
    pub fn step(self, (dr, dc): (isize, isize), size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_on_grid() {
        let pos = Position::new(0, 2);
        assert_eq!(pos.step((1, -1), 3), Some(Position::new(1, 1)));
        assert_eq!(pos.step((-1, 0), 3), None);
        assert_eq!(pos.step((0, 1), 3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 7).to_string(), "(2, 7)");
    }
}
