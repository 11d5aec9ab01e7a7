//! Core domain types for N×N tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the AI in player-vs-AI games).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Display colour of this player's mark, as a CSS-style hex string.
    pub fn colour_hex(self) -> &'static str {
        match self {
            Player::X => "#EEEEEE",
            Player::O => "#00ADB5",
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 3;

/// Largest supported board edge.
pub const MAX_SIZE: usize = 10;

/// Edge length of a board, guaranteed to lie in `MIN_SIZE..=MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Creates a board size, or `None` if `n` is out of range.
    pub fn new(n: usize) -> Option<Self> {
        (MIN_SIZE..=MAX_SIZE).contains(&n).then_some(Self(n))
    }

    /// Returns the edge length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a board of this size.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = String;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| format!("board size {n} outside {MIN_SIZE}..={MAX_SIZE}"))
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// N×N board, squares stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size.get() && pos.col < self.size.get()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size.get() + pos.col)
    }

    /// Gets the square at the given position, `None` if off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).map(|i| self.squares[i])
    }

    /// Sets the square at the given position.
    ///
    /// Positions off the board are ignored and reported as `false`.
    pub fn set(&mut self, pos: Position, square: Square) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.squares[i] = square;
                true
            }
            None => false,
        }
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over every position with its square, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        let n = self.size.get();
        self.squares
            .iter()
            .enumerate()
            .map(move |(i, sq)| (Position::new(i / n, i % n), *sq))
    }

    /// Returns the positions of all empty squares, row-major.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, sq)| *sq == Square::Empty)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Counts the occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let n = self.size.get();
        let mut result = String::new();
        for row in 0..n {
            for col in 0..n {
                let symbol = match self.squares[row * n + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col + 1 < n {
                    result.push('|');
                }
            }
            if row + 1 < n {
                result.push('\n');
            }
        }
        result
    }
}
