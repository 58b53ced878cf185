//! Core domain types for tic-tac-toe.

use super::action::{BoardParseError, MoveError};
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
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
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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

    /// Snapshot symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Snapshot symbol for this square (`.` when empty).
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the player with three in a row, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Places `mark` at `pos` if the square is free.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, pos: Position, mark: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(mark));
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as a 9-character row-major snapshot, e.g. `XO..X...O`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Parses a row-major snapshot. `X`/`O` (any case) are marks; `.`, `-`, `_`
/// and space are empty. Surrounding whitespace is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.trim_matches(|c: char| c == '\n' || c == '\r' || c == '\t').chars().collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (index, symbol) in cells.into_iter().enumerate() {
            let square = match symbol {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => return Err(BoardParseError::IllegalSymbol { index, symbol: other }),
            };
            board.squares[index] = square;
        }
        Ok(board)
    }
}
