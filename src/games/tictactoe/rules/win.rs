//! Win detection logic for tic-tac-toe.

use super::super::tracker::LineTally;
use super::super::{Board, Player};
use strum::IntoEnumIterator;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. On an unreachable board where both marks own a
/// line, X is reported.
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&mark| LineTally::from_board(board, mark).is_winning_line())
}
