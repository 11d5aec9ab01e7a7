//! Game status and per-click turn reports.

use super::action::Move;
use super::rules::WIN_LENGTH;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// `Won` and `Draw` are terminal: no further moves are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// The winning run, in scan order.
        cells: [Position; WIN_LENGTH],
    },
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Winning cells, empty unless the game was won.
    pub fn winning_cells(&self) -> &[Position] {
        match self {
            GameStatus::Won { cells, .. } => cells,
            _ => &[],
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, .. } => write!(f, "{} wins!", winner),
            GameStatus::Draw => write!(f, "Draw!"),
        }
    }
}

/// What one click did: the human move, the AI reply if any, and the
/// resulting status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The accepted human move.
    pub human: Move,
    /// The AI's reply, in player-vs-AI games that are still in progress.
    pub ai: Option<Move>,
    /// Status after the whole turn.
    pub status: GameStatus,
}
