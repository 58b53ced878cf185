//! Explicit game state for the turn controller.
//!
//! A [`GameState`] is a plain value: applying a move returns the next state
//! and leaves the old one untouched, so the controller and the search engine
//! never share a mutable "current player".

use super::action::{Move, MoveError};
use super::tracker::LineTally;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
    tally_x: LineTally,
    tally_o: LineTally,
}

impl GameState {
    /// Creates a new game. X always moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            tally_x: LineTally::new(Player::X),
            tally_o: LineTally::new(Player::O),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the running line tally for `mark`.
    pub fn tally(&self, mark: Player) -> &LineTally {
        match mark {
            Player::X => &self.tally_x,
            Player::O => &self.tally_o,
        }
    }

    /// Applies the current player's move at 1-based `row`, `col` and
    /// returns the resulting state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is outside 1-3
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let mover = self.to_move;

        let mut next = self.clone();
        next.board.try_move(pos, mover)?;
        next.history.push(Move::new(mover, pos));

        let tally = match mover {
            Player::X => &mut next.tally_x,
            Player::O => &mut next.tally_o,
        };
        tally.record(pos);

        if tally.is_winning_line() {
            next.status = GameStatus::Won(mover);
        } else if next.board.is_full() {
            next.status = GameStatus::Draw;
        } else {
            next.to_move = mover.opponent();
        }

        debug!(board = %next.board, status = ?next.status, "Move applied");
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
