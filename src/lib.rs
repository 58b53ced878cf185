//! Strictly Tic-Tac-Toe library - console tic-tac-toe with a minimax bot
//!
//! # Architecture
//!
//! - **Games**: board types, line tallies, rules and the minimax engine
//! - **Console**: rendering, human and bot players, and the turn loop
//! - **Config**: TOML seat configuration
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{evaluate, Board, Mark};
//!
//! // X threatens the top row; O must block at row 1, col 3.
//! let board: Board = "XX.OO....".parse().unwrap();
//! let result = evaluate(&board, Mark::O, Mark::X);
//! let best = result.best().unwrap();
//! assert_eq!((best.row(), best.col()), (1, 3));
//! assert_eq!(*result.score(), 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, SeatConfig, SeatKind};

// Crate-level exports - Console front end
pub use console::Orchestrator;
pub use console::players::{BotPlayer, HumanPlayer, Player, SharedLines, shared_lines};
pub use console::render;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, DRAW_SCORE, GameState, GameStatus, LOSS_SCORE, LineTally, Mark, Move,
    MoveError, Position, SearchError, SearchResult, Square, WIN_SCORE, evaluate, find_best_move,
    Player as TicTacToePlayer,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{check_winner, is_draw, is_full};
