//! Property tests over every supported board size.

use gridtoe::{
    pick_random_empty_cell, Board, BoardSize, GameMode, GameSetup, GameStatus, InvariantSet,
    Player, Position, Square, TicTacToe, TicTacToeInvariants, MAX_SIZE, MIN_SIZE,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_size() -> impl Strategy<Value = BoardSize> {
    (MIN_SIZE..=MAX_SIZE).prop_filter_map("size in range", BoardSize::new)
}

fn any_mode() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::PlayerVsPlayer), Just(GameMode::PlayerVsAi)]
}

proptest! {
    #[test]
    fn fresh_board_is_empty_and_open(size in any_size(), mode in any_mode(), seed in any::<u64>()) {
        let game = TicTacToe::with_seed(GameSetup::new(size, mode), seed);
        prop_assert_eq!(game.filled(), 0);
        prop_assert!(!game.is_over());
        prop_assert!(!game.check_draw());
        prop_assert_eq!(game.board().empty_positions().len(), size.cells());
    }

    #[test]
    fn random_pick_is_empty_and_on_board(
        size in any_size(),
        marks in prop::collection::vec(any::<bool>(), 100),
        seed in any::<u64>(),
    ) {
        let mut board = Board::new(size);
        let n = size.get();
        for (i, filled) in marks.iter().take(size.cells()).enumerate() {
            if *filled {
                board.set(Position::new(i / n, i % n), Square::Occupied(Player::X));
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match pick_random_empty_cell(&board, &mut rng) {
            Some(pos) => {
                prop_assert!(board.contains(pos));
                prop_assert_eq!(board.get(pos), Some(Square::Empty));
            }
            None => prop_assert_eq!(board.occupied_count(), size.cells()),
        }
    }

    #[test]
    fn random_games_keep_invariants(
        size in any_size(),
        mode in any_mode(),
        clicks in prop::collection::vec((0..MAX_SIZE, 0..MAX_SIZE), 1..120),
        seed in any::<u64>(),
    ) {
        let mut game = TicTacToe::with_seed(GameSetup::new(size, mode), seed);
        for (row, col) in clicks {
            let before = game.board().clone();
            let filled = game.filled();
            if game.play_turn(Position::new(row, col)).is_err() {
                prop_assert_eq!(game.board(), &before);
                prop_assert_eq!(game.filled(), filled);
            }
            prop_assert!(TicTacToeInvariants::check_all(&game).is_ok());
        }

        let full = game.filled() == size.cells();
        match game.status() {
            GameStatus::Draw => prop_assert!(full),
            GameStatus::InProgress => prop_assert!(!full),
            GameStatus::Won { cells, .. } => prop_assert_eq!(cells.len(), 3),
        }
    }
}
