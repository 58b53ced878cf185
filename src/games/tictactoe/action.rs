//! Move events and the errors raised while validating them.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> row {}, col {}",
            self.player,
            self.position.row(),
            self.position.col()
        )
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside 1-3.
    #[display("Row {row}, col {col} is off the board")]
    OutOfBounds {
        /// Row as entered.
        row: usize,
        /// Column as entered.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Error parsing a board snapshot string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// Snapshot did not contain exactly 9 cells.
    #[display("Board snapshot must have 9 cells, got {_0}")]
    WrongLength(#[error(not(source))] usize),

    /// A cell held something other than X, O or an empty marker.
    #[display("Illegal symbol {symbol:?} at cell {index}")]
    IllegalSymbol {
        /// Cell index (0-8).
        index: usize,
        /// Offending character.
        symbol: char,
    },
}
