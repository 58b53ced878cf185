//! Player trait and implementations.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::{HumanPlayer, SharedLines, shared_lines};

use crate::games::tictactoe::GameState;
use anyhow::Result;

/// Something that can be asked for a move.
///
/// Each request resolves exactly once with a 1-based `(row, col)`. The
/// controller validates it; an illegal answer just triggers another request.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move for the player on turn in `state`.
    async fn request_move(&mut self, state: &GameState) -> Result<(usize, usize)>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
