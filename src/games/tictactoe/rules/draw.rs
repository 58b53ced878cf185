//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins top row on a full board
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
