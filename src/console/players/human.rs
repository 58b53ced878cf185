//! Human player reading row and column numbers from a line source.

use super::Player;
use crate::games::tictactoe::GameState;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Line reader shared by every human at the same console.
///
/// Two humans reading stdin through separate buffers would steal each
/// other's buffered lines, so they share one.
pub type SharedLines<R> = Arc<Mutex<Lines<R>>>;

/// Wraps `reader` for sharing between human players.
pub fn shared_lines<R: AsyncBufRead + Unpin>(reader: R) -> SharedLines<R> {
    Arc::new(Mutex::new(reader.lines()))
}

/// Human player prompting for a row, then a column.
pub struct HumanPlayer<R, W> {
    name: String,
    input: SharedLines<R>,
    out: W,
}

impl<R, W> HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a human player reading from `input` and prompting on `out`.
    pub fn new(name: impl Into<String>, input: SharedLines<R>, out: W) -> Self {
        Self {
            name: name.into(),
            input,
            out,
        }
    }

    /// Prompts until a line parses as a number.
    async fn read_number(&mut self, prompt: &str) -> Result<usize> {
        loop {
            self.out.write_all(prompt.as_bytes()).await?;
            self.out.flush().await?;

            let line = self
                .input
                .lock()
                .await
                .next_line()
                .await?
                .ok_or_else(|| anyhow::anyhow!("Input closed"))?;

            match line.trim().parse::<usize>() {
                Ok(n) => return Ok(n),
                Err(e) => {
                    warn!(player = %self.name, input = %line, error = %e, "Not a number");
                    self.out.write_all(b"Please enter a number\n").await?;
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Player for HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    #[instrument(skip_all, fields(player = %self.name))]
    async fn request_move(&mut self, _state: &GameState) -> Result<(usize, usize)> {
        let row = self.read_number("Row: ").await?;
        let col = self.read_number("Col: ").await?;
        debug!(row, col, "Human entered move");
        Ok((row, col))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
