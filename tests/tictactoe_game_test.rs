//! Tests for explicit game state and move application.

use strictly_tictactoe::{GameState, GameStatus, Mark, Move, MoveError, Position};

fn play(moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &(row, col)| {
        state.apply(row, col).expect("legal move")
    })
}

#[test]
fn test_new_game_starts_with_x() {
    let state = GameState::new();
    assert_eq!(state.to_move(), Mark::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!(state.history().is_empty());
}

#[test]
fn test_moves_alternate() {
    let state = GameState::new().apply(2, 2).unwrap();
    assert_eq!(state.to_move(), Mark::O);
    let state = state.apply(1, 1).unwrap();
    assert_eq!(state.to_move(), Mark::X);
    assert_eq!(
        state.history(),
        &[
            Move::new(Mark::X, Position::Center),
            Move::new(Mark::O, Position::TopLeft),
        ]
    );
}

#[test]
fn test_apply_leaves_previous_state_untouched() {
    let before = GameState::new();
    let after = before.apply(1, 3).unwrap();
    assert!(before.board().is_empty(Position::TopRight));
    assert!(!after.board().is_empty(Position::TopRight));
}

#[test]
fn test_occupied_square_rejected() {
    let state = GameState::new().apply(2, 2).unwrap();
    assert_eq!(
        state.apply(2, 2),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    // The rejected move does not pass the turn.
    assert_eq!(state.to_move(), Mark::O);
}

#[test]
fn test_out_of_bounds_rejected() {
    let state = GameState::new();
    assert_eq!(state.apply(0, 1), Err(MoveError::OutOfBounds { row: 0, col: 1 }));
    assert_eq!(state.apply(1, 4), Err(MoveError::OutOfBounds { row: 1, col: 4 }));
    assert_eq!(state.apply(9, 9), Err(MoveError::OutOfBounds { row: 9, col: 9 }));
}

#[test]
fn test_row_win_detected() {
    // X: (1,1) (1,2) (1,3); O: (2,1) (2,2)
    let state = play(&[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    assert!(state.tally(Mark::X).is_winning_line());
    assert!(!state.tally(Mark::O).is_winning_line());
}

#[test]
fn test_diagonal_win_for_o() {
    let state = play(&[(1, 2), (1, 3), (1, 1), (2, 2), (3, 3), (3, 1)]);
    assert_eq!(state.status(), GameStatus::Won(Mark::O));
}

#[test]
fn test_full_board_is_draw() {
    // X O X / X O O / O X X
    let state = play(&[
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 2),
        (2, 1),
        (2, 3),
        (3, 2),
        (3, 1),
        (3, 3),
    ]);
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.board().to_string(), "XOXXOOOXX");
}

#[test]
fn test_no_moves_after_game_over() {
    let state = play(&[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);
    assert_eq!(state.apply(3, 3), Err(MoveError::GameOver));
}

#[test]
fn test_move_error_messages() {
    assert!(
        MoveError::SquareOccupied(Position::Center)
            .to_string()
            .contains("occupied")
    );
    assert!(
        MoveError::OutOfBounds { row: 4, col: 1 }
            .to_string()
            .contains("off the board")
    );
}
