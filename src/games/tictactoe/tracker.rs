//! Per-mark line tallies for win detection.
//!
//! A [`LineTally`] counts how many of one mark's pieces sit on each row,
//! column and diagonal. A counter reaching 3 means the mark owns that line.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of pieces that completes a line.
const LINE_LENGTH: u8 = 3;

/// Row, column and diagonal counters for a single mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTally {
    mark: Player,
    rows: [u8; 3],
    cols: [u8; 3],
    /// `[main, anti]`: main runs top-left to bottom-right.
    diagonals: [u8; 2],
}

impl LineTally {
    /// Creates a zeroed tally for `mark`.
    pub fn new(mark: Player) -> Self {
        Self {
            mark,
            rows: [0; 3],
            cols: [0; 3],
            diagonals: [0; 2],
        }
    }

    /// Rebuilds a tally by scanning every cell `mark` occupies on `board`.
    pub fn from_board(board: &Board, mark: Player) -> Self {
        let mut tally = Self::new(mark);
        tally.rescan(board);
        tally
    }

    /// Binds the tally to `mark` and zeroes every counter.
    pub fn reset(&mut self, mark: Player) {
        *self = Self::new(mark);
    }

    /// Zeroes the counters and records every cell this mark holds on `board`.
    pub fn rescan(&mut self, board: &Board) {
        self.reset(self.mark);
        for pos in Position::ALL {
            if board.get(pos) == Square::Occupied(self.mark) {
                self.record(pos);
            }
        }
    }

    /// Records a piece at 0-based `row`, `col`.
    ///
    /// The center counts toward both diagonals.
    pub fn record_move(&mut self, row: usize, col: usize) {
        if row >= 3 || col >= 3 {
            warn!(row, col, "Ignoring move outside the board");
            return;
        }
        self.rows[row] = self.rows[row].saturating_add(1);
        self.cols[col] = self.cols[col].saturating_add(1);
        if row == col {
            self.diagonals[0] = self.diagonals[0].saturating_add(1);
        }
        if row + col == 2 {
            self.diagonals[1] = self.diagonals[1].saturating_add(1);
        }
    }

    /// Records a piece at `pos`.
    pub fn record(&mut self, pos: Position) {
        self.record_move(pos.row() - 1, pos.col() - 1);
    }

    /// True iff some row, column or diagonal holds three of this mark.
    pub fn is_winning_line(&self) -> bool {
        self.rows
            .iter()
            .chain(&self.cols)
            .chain(&self.diagonals)
            .any(|&count| count == LINE_LENGTH)
    }

    /// The mark this tally follows.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Row counters, top to bottom.
    pub fn rows(&self) -> &[u8; 3] {
        &self.rows
    }

    /// Column counters, left to right.
    pub fn cols(&self) -> &[u8; 3] {
        &self.cols
    }

    /// Diagonal counters, `[main, anti]`.
    pub fn diagonals(&self) -> &[u8; 2] {
        &self.diagonals
    }
}
