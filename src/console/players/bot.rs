//! Computer player backed by the minimax engine.

use super::Player;
use crate::games::tictactoe::{GameState, Mark, evaluate};
use anyhow::{Context, Result};
use tracing::{info, instrument};

/// Bot that always plays the minimax-optimal move for its mark.
#[derive(Debug, Clone)]
pub struct BotPlayer {
    name: String,
    mark: Mark,
}

impl BotPlayer {
    /// Creates a bot playing `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        let name = name.into();
        info!(bot = %name, %mark, "Creating bot player");
        Self { name, mark }
    }

    /// The mark this bot plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

#[async_trait::async_trait]
impl Player for BotPlayer {
    #[instrument(skip(self, state), fields(bot = %self.name, board = %state.board()))]
    async fn request_move(&mut self, state: &GameState) -> Result<(usize, usize)> {
        let board = state.board().clone();
        let mark = self.mark;

        let result = tokio::task::spawn_blocking(move || evaluate(&board, mark, mark.opponent()))
            .await
            .context("Search task failed")?;

        let position = result
            .best()
            .ok_or_else(|| anyhow::anyhow!("No move available (score {})", result.score()))?;

        info!(
            row = position.row(),
            col = position.col(),
            score = *result.score(),
            "Trying move"
        );
        Ok((position.row(), position.col()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
