mod action;
mod game;
mod minimax;
mod position;
pub mod rules;
mod tracker;
mod types;

pub use action::{BoardParseError, Move, MoveError};
pub use game::{GameState, GameStatus};
pub use minimax::{
    evaluate, find_best_move, SearchError, SearchResult, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
};
pub use position::Position;
pub use tracker::LineTally;
pub use types::{Board, Player, Square};

/// Alias for clarity where a player means the symbol on the board.
pub type Mark = Player;
