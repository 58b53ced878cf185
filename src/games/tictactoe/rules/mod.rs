//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board snapshot. Win detection goes through
//! [`LineTally`](super::tracker::LineTally) so the live game and the search
//! engine agree on what counts as a line.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
