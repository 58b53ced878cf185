//! Exhaustive minimax search for the computer player.
//!
//! The search runs to full depth with no pruning and no heuristic
//! evaluation. Every level rebuilds both marks' [`LineTally`] from the
//! working board before checking base cases, so tallies can never drift
//! from the position being evaluated.
//!
//! Candidates are tried in increasing index order and compared strictly,
//! so among equal scores the lowest-index cell wins. On an empty board
//! every move draws, which makes the opening move the top-left corner.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{find_best_move, Board, Mark};
//!
//! let board: Board = "OO.XX....".parse().unwrap();
//! let pos = find_best_move(&board, Mark::O, Mark::X).unwrap();
//! assert_eq!((pos.row(), pos.col()), (1, 3));
//! ```

use super::tracker::LineTally;
use super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Score of a position the searching side has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the opponent has won.
pub const LOSS_SCORE: i32 = -10;
/// Score of a full board with no line.
pub const DRAW_SCORE: i32 = 0;

/// Starting best for the maximizing side; below any real score.
const MAX_SENTINEL: i32 = -100;
/// Starting best for the minimizing side; above any real score.
const MIN_SENTINEL: i32 = 100;

/// Outcome of a search: the resolved score and, unless the position was
/// already terminal, the cell that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct SearchResult {
    /// Score from the searching side's perspective.
    score: i32,
    /// Chosen cell; `None` when a base case fired at the top.
    best: Option<Position>,
}

/// Errors returned by [`find_best_move`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The board is already full or already won.
    #[display("No move available: position is terminal (score {score})")]
    NoMoveAvailable {
        /// Base-case score of the terminal position.
        score: i32,
    },

    /// Both sides were given the same mark.
    #[display("Self and opponent cannot both play {_0}")]
    IdenticalMarks(#[error(not(source))] Player),
}

/// Finds the optimal move for `self_mark` against `opponent_mark`.
///
/// # Errors
///
/// Returns [`SearchError::NoMoveAvailable`] on a full or decided board, and
/// [`SearchError::IdenticalMarks`] if both marks are the same.
#[instrument(skip(board), fields(board = %board))]
pub fn find_best_move(
    board: &Board,
    self_mark: Player,
    opponent_mark: Player,
) -> Result<Position, SearchError> {
    if self_mark == opponent_mark {
        return Err(SearchError::IdenticalMarks(self_mark));
    }

    let result = evaluate(board, self_mark, opponent_mark);
    debug!(score = result.score, best = ?result.best, "Search complete");
    result
        .best
        .ok_or(SearchError::NoMoveAvailable { score: result.score })
}

/// Runs the full search with `self_mark` on the move and returns the score
/// alongside the chosen cell.
pub fn evaluate(board: &Board, self_mark: Player, opponent_mark: Player) -> SearchResult {
    let mut search = Search {
        board: board.clone(),
        self_mark,
        opponent_mark,
    };
    search.minimax(self_mark)
}

/// Working state owned by one top-level call.
struct Search {
    board: Board,
    self_mark: Player,
    opponent_mark: Player,
}

impl Search {
    fn minimax(&mut self, to_move: Player) -> SearchResult {
        let me = LineTally::from_board(&self.board, self.self_mark);
        let opponent = LineTally::from_board(&self.board, self.opponent_mark);

        if me.is_winning_line() {
            return SearchResult::new(WIN_SCORE, None);
        }
        if opponent.is_winning_line() {
            return SearchResult::new(LOSS_SCORE, None);
        }

        let open = Position::valid_moves(&self.board);
        if open.is_empty() {
            return SearchResult::new(DRAW_SCORE, None);
        }

        let next = if to_move == self.self_mark {
            self.opponent_mark
        } else {
            self.self_mark
        };

        let mut candidates = Vec::with_capacity(open.len());
        for pos in open {
            self.board.set(pos, Square::Occupied(to_move));
            let score = self.minimax(next).score;
            self.board.set(pos, Square::Empty);
            candidates.push((pos, score));
        }

        let maximizing = to_move == self.self_mark;
        let mut best = if maximizing {
            SearchResult::new(MAX_SENTINEL, None)
        } else {
            SearchResult::new(MIN_SENTINEL, None)
        };
        for (pos, score) in candidates {
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult::new(score, Some(pos));
            }
        }
        best
    }
}
