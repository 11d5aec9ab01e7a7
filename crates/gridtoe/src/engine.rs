//! The board state and win engine.
//!
//! One [`TicTacToe`] value owns a whole game: board, turn, status, and the
//! RNG that drives the random opponent. Frontends feed it clicks through
//! [`TicTacToe::play_turn`] and read back a [`BoardView`].

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::{self, WinResult};
use super::setup::{GameMode, GameSetup};
use super::status::{GameStatus, Turn};
use super::view::BoardView;
use super::{ai, Board, BoardSize, Player, Position, Square};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine for an N×N board.
#[derive(Debug, Clone)]
pub struct TicTacToe<R = ChaCha8Rng> {
    pub(crate) setup: GameSetup,
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) filled: usize,
    pub(crate) history: Vec<Move>,
    rng: R,
}

impl TicTacToe<ChaCha8Rng> {
    /// Creates a new game with an entropy-seeded opponent.
    #[instrument]
    pub fn new(setup: GameSetup) -> Self {
        Self::with_rng(setup, ChaCha8Rng::from_entropy())
    }

    /// Creates a new game whose opponent replays the same moves for the
    /// same seed.
    #[instrument]
    pub fn with_seed(setup: GameSetup, seed: u64) -> Self {
        Self::with_rng(setup, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> TicTacToe<R> {
    /// Creates a new game drawing opponent moves from `rng`.
    pub fn with_rng(setup: GameSetup, rng: R) -> Self {
        info!(size = %setup.size(), mode = %setup.mode(), "Starting game");
        Self {
            board: Board::new(*setup.size()),
            setup,
            current_player: Player::X,
            status: GameStatus::InProgress,
            filled: 0,
            history: Vec::new(),
            rng,
        }
    }

    /// Records `player`'s mark at `pos`.
    ///
    /// Only placement is done here; win and draw evaluation belong to
    /// [`play_turn`](Self::play_turn). On error the game is unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is won or drawn
    /// - [`MoveError::OutOfBounds`] if `pos` is off the board
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(filled = self.filled))]
    pub fn apply_move(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(pos) {
            None => return Err(MoveError::OutOfBounds(pos)),
            Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(pos)),
            Some(Square::Empty) => {}
        }
        self.board.set(pos, Square::Occupied(player));
        self.filled += 1;
        self.history.push(Move::new(player, pos));
        Ok(())
    }

    /// Checks the lines through `pos` for a run of `player`'s marks.
    pub fn check_win(&self, pos: Position, player: Player) -> WinResult {
        rules::check_win(&self.board, pos, player)
    }

    /// True iff every square is filled and no winner has been recorded.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(&self.board, self.filled, self.status.winner().is_some())
    }

    /// Picks a uniformly random empty square, `None` on a full board.
    pub fn pick_random_empty_cell(&mut self) -> Option<Position> {
        ai::pick_random_empty_cell(&self.board, &mut self.rng)
    }

    /// Handles one click at `pos`.
    ///
    /// Places the current player's mark and evaluates the result. In
    /// player-vs-player games the turn then passes to the opponent; in
    /// player-vs-AI games the human always plays X and the AI answers with
    /// one random O move before this returns.
    ///
    /// # Errors
    ///
    /// Propagates [`apply_move`](Self::apply_move) errors for the human move;
    /// the game is unchanged in that case.
    ///
    /// Debug builds re-check the game invariants after each placed move and
    /// return [`MoveError::InvariantViolation`] when one fails. That error
    /// is raised after the move is applied, so the board keeps the move (and
    /// the human move when the AI reply is the one that fails). It signals a
    /// bug, not a rejected click.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_turn(&mut self, pos: Position) -> Result<Turn, MoveError> {
        let human = Move::new(self.current_player, pos);
        self.place(human)?;

        let mut ai = None;
        if !self.status.is_terminal() {
            match self.setup.mode() {
                GameMode::PlayerVsPlayer => {
                    self.current_player = self.current_player.opponent();
                }
                GameMode::PlayerVsAi => {
                    if let Some(cell) = self.pick_random_empty_cell() {
                        let reply = Move::new(Player::O, cell);
                        self.place(reply)?;
                        ai = Some(reply);
                    }
                }
            }
        }

        Ok(Turn {
            human,
            ai,
            status: self.status.clone(),
        })
    }

    /// Applies a move, then checks for a win and for a draw.
    fn place(&mut self, action: Move) -> Result<(), MoveError> {
        self.apply_move(action.position, action.player)?;

        if let WinResult::Win { cells } = self.check_win(action.position, action.player) {
            info!(winner = %action.player, ?cells, "Game won");
            self.status = GameStatus::Won {
                winner: action.player,
                cells,
            };
        } else if self.check_draw() {
            info!(filled = self.filled, "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            debug!(%action, filled = self.filled, "Move accepted");
        }

        #[cfg(debug_assertions)]
        self.verify()?;

        Ok(())
    }

    /// Checks the game invariants, reporting violations as a move error.
    pub fn verify(&self) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violation");
            MoveError::InvariantViolation(descriptions)
        })
    }

    /// Clears the board for a new game with the same size and mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board = Board::new(*self.setup.size());
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.filled = 0;
        self.history.clear();
    }
}

impl<R> TicTacToe<R> {
    /// Returns the validated setup.
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        *self.setup.size()
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        *self.setup.mode()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose click comes next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of accepted moves since the game started.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Status line for display.
    pub fn status_text(&self) -> String {
        match &self.status {
            GameStatus::InProgress => format!("{} to move", self.current_player),
            terminal => terminal.to_string(),
        }
    }

    /// Snapshot of everything a renderer needs.
    pub fn snapshot(&self) -> BoardView {
        BoardView::of(self)
    }
}
