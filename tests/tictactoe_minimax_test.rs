//! Tests for the minimax search engine.

use std::collections::HashMap;
use strictly_tictactoe::{
    Board, DRAW_SCORE, LOSS_SCORE, Mark, Position, SearchError, Square, WIN_SCORE, check_winner,
    evaluate, find_best_move, is_full,
};

fn board(snapshot: &str) -> Board {
    snapshot.parse().expect("valid snapshot")
}

fn best_row_col(snapshot: &str, me: Mark) -> (usize, usize) {
    let pos = find_best_move(&board(snapshot), me, me.opponent()).expect("move available");
    (pos.row(), pos.col())
}

#[test]
fn test_completes_own_line() {
    assert_eq!(best_row_col("OO.XX....", Mark::O), (1, 3));
}

#[test]
fn test_takes_first_of_two_winning_cells() {
    // Both index 2 (block, still winning) and index 5 (immediate win) score +10.
    let result = evaluate(&board("XX.OO...."), Mark::O, Mark::X);
    assert_eq!(*result.score(), WIN_SCORE);
    assert_eq!(*result.best(), Some(Position::TopRight));
    assert_eq!(best_row_col("XX.OO....", Mark::O), (1, 3));
}

#[test]
fn test_empty_board_opens_top_left_and_draws() {
    let result = evaluate(&Board::new(), Mark::O, Mark::X);
    assert_eq!(*result.score(), DRAW_SCORE);
    assert_eq!(*result.best(), Some(Position::TopLeft));
}

#[test]
fn test_answers_center_opening_with_corner() {
    assert_eq!(best_row_col("....X....", Mark::O), (1, 1));
}

#[test]
fn test_takes_center_after_corner_opening() {
    assert_eq!(best_row_col("X........", Mark::O), (2, 2));
}

#[test]
fn test_full_board_has_no_move() {
    let full = board("XOXXOOOXX");
    let result = evaluate(&full, Mark::O, Mark::X);
    assert_eq!(*result.score(), DRAW_SCORE);
    assert_eq!(*result.best(), None);
    assert_eq!(
        find_best_move(&full, Mark::O, Mark::X),
        Err(SearchError::NoMoveAvailable { score: DRAW_SCORE })
    );
}

#[test]
fn test_all_draws_picks_lowest_index() {
    // Every reply scores 0; the first empty cell (index 0) is chosen.
    assert_eq!(best_row_col("..XXOO..X", Mark::O), (1, 1));
    assert_eq!(best_row_col(".X..O.XOX", Mark::O), (1, 1));
}

#[test]
fn test_last_cell_is_taken() {
    assert_eq!(best_row_col("XOXXOOOX.", Mark::O), (3, 3));
}

#[test]
fn test_lost_position_picks_lowest_index() {
    // X holds a double threat; every O move loses.
    let result = evaluate(&board("XOXOXO..."), Mark::O, Mark::X);
    assert_eq!(*result.score(), LOSS_SCORE);
    assert_eq!(*result.best(), Some(Position::BottomLeft));
}

#[test]
fn test_prefers_draw_over_loss() {
    // Index 3 loses to X's column; index 5 holds the draw.
    let result = evaluate(&board("XOX.O.OXX"), Mark::O, Mark::X);
    assert_eq!(*result.score(), DRAW_SCORE);
    assert_eq!(*result.best(), Some(Position::MiddleRight));
}

#[test]
fn test_already_won_board_forms_base_case() {
    let won = board("OOOXX....");
    assert_eq!(*evaluate(&won, Mark::O, Mark::X).score(), WIN_SCORE);
    assert_eq!(*evaluate(&won, Mark::X, Mark::O).score(), LOSS_SCORE);
    assert_eq!(
        find_best_move(&won, Mark::X, Mark::O),
        Err(SearchError::NoMoveAvailable { score: LOSS_SCORE })
    );
}

#[test]
fn test_engine_is_symmetric_in_marks() {
    assert_eq!(best_row_col("XX.OO....", Mark::X), (1, 3));
    assert_eq!(best_row_col("OO.XX....", Mark::X), (1, 3));
}

#[test]
fn test_identical_marks_rejected() {
    assert_eq!(
        find_best_move(&Board::new(), Mark::X, Mark::X),
        Err(SearchError::IdenticalMarks(Mark::X))
    );
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let snapshot = board("X...O...X");
    let first = evaluate(&snapshot, Mark::O, Mark::X);
    for _ in 0..5 {
        assert_eq!(evaluate(&snapshot, Mark::O, Mark::X), first);
    }
}

#[test]
fn test_input_board_is_untouched() {
    let snapshot = board("X...O....");
    let copy = snapshot.clone();
    let _ = find_best_move(&snapshot, Mark::X, Mark::O);
    assert_eq!(snapshot, copy);
}

#[test]
fn test_chosen_cell_is_always_empty() {
    for snapshot in ["X........", "XO.......", "X...O...X", "XOX.O.OXX", "..XXOO..X"] {
        let b = board(snapshot);
        let pos = find_best_move(&b, Mark::O, Mark::X).expect("move available");
        assert!(b.is_empty(pos), "{} picked filled {:?}", snapshot, pos);
    }
}

#[test]
fn test_bot_beats_first_empty_opponent() {
    let mut b = Board::new();
    let mut to_move = Mark::X;
    while check_winner(&b).is_none() && !is_full(&b) {
        let pos = if to_move == Mark::X {
            find_best_move(&b, Mark::X, Mark::O).expect("move available")
        } else {
            Position::valid_moves(&b)[0]
        };
        b.set(pos, Square::Occupied(to_move));
        to_move = to_move.opponent();
    }
    assert_eq!(b.to_string(), "XOOXXOX..");
    assert_eq!(check_winner(&b), Some(Mark::X));
}

/// Plays the bot against every possible opponent line and asserts it never loses.
fn explore(b: &mut Board, to_move: Mark, bot: Mark, cache: &mut HashMap<String, Position>) {
    if let Some(winner) = check_winner(b) {
        assert_eq!(winner, bot, "bot lost on {}", b);
        return;
    }
    if is_full(b) {
        return;
    }

    if to_move == bot {
        let key = b.to_string();
        let pos = *cache
            .entry(key)
            .or_insert_with(|| find_best_move(b, bot, bot.opponent()).expect("move available"));
        assert!(b.is_empty(pos));
        b.set(pos, Square::Occupied(bot));
        explore(b, to_move.opponent(), bot, cache);
        b.set(pos, Square::Empty);
    } else {
        for pos in Position::valid_moves(b) {
            b.set(pos, Square::Occupied(to_move));
            explore(b, to_move.opponent(), bot, cache);
            b.set(pos, Square::Empty);
        }
    }
}

#[test]
fn test_never_loses_moving_first() {
    let mut cache = HashMap::new();
    explore(&mut Board::new(), Mark::X, Mark::X, &mut cache);
}

#[test]
fn test_never_loses_moving_second() {
    let mut cache = HashMap::new();
    explore(&mut Board::new(), Mark::X, Mark::O, &mut cache);
}
