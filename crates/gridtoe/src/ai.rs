//! Random-move opponent.

use super::{Board, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks an empty square uniformly at random.
///
/// Returns `None` when the board is full.
#[instrument(skip(board, rng), fields(size = board.size().get()))]
pub fn pick_random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = board.empty_positions();
    let choice = empty.choose(rng).copied();
    debug!(candidates = empty.len(), ?choice, "AI chose position");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Player, Square};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_full_board_has_no_pick() {
        let mut board = Board::new(BoardSize::new(3).unwrap());
        for pos in board.empty_positions() {
            board.set(pos, Square::Occupied(Player::O));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(pick_random_empty_cell(&board, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_picked() {
        let mut board = Board::new(BoardSize::new(3).unwrap());
        for pos in board.empty_positions() {
            if pos != Position::new(2, 1) {
                board.set(pos, Square::Occupied(Player::X));
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(pick_random_empty_cell(&board, &mut rng), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_every_empty_cell_reachable() {
        let board = Board::new(BoardSize::new(3).unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            if let Some(pos) = pick_random_empty_cell(&board, &mut rng) {
                seen.insert(pos);
            }
        }
        assert_eq!(seen.len(), 9);
    }
}
