//! Text rendering for the console.

use crate::games::tictactoe::{Board, Player, Position, Square};
use crossterm::Command;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

const BANNER_RULE: &str = "****************************************************";

/// Renders the board as a grid with 1-based row and column headers.
///
/// ```text
///      1   2   3
///  1   X | O |
///     ---+---+---
///  2     | X |
///     ---+---+---
///  3     |   | O
/// ```
pub fn board(board: &Board) -> String {
    let mut out = String::from("     1   2   3\n");
    for row in 1..=3 {
        let cells: Vec<char> = (1..=3)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| match board.get(pos) {
                Square::Empty => ' ',
                Square::Occupied(player) => player.symbol(),
            })
            .collect();
        let line = format!(" {}   {} | {} | {}", row, cells[0], cells[1], cells[2]);
        out.push_str(line.trim_end());
        out.push('\n');
        if row < 3 {
            out.push_str("    ---+---+---\n");
        }
    }
    out
}

/// ANSI sequence that clears the screen and homes the cursor.
pub fn clear_sequence() -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    Clear(ClearType::All).write_ansi(&mut out)?;
    MoveTo(0, 0).write_ansi(&mut out)?;
    Ok(out)
}

/// Prompt announcing whose turn it is.
pub fn turn_prompt(mark: Player) -> String {
    format!("\n\nPlayer {}'s Turn:\n", mark)
}

/// Notice printed after a rejected move.
pub fn invalid_move() -> &'static str {
    "\n*********Invalid Move - try again*********\n"
}

/// Game-over banner. `None` means a tie.
pub fn game_over(winner: Option<Player>) -> String {
    let message = match winner {
        Some(mark) => format!("***************--- Player {} Has Won ---*************", mark),
        None => "**********--- Game Has Ended In A Tie ---***********".to_string(),
    };
    format!("{BANNER_RULE}\n{message}\n{BANNER_RULE}\n")
}
