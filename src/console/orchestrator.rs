//! Turn loop between two players.

use super::players::Player;
use super::render;
use crate::games::tictactoe::{GameState, GameStatus, Mark};
use anyhow::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// Runs a game between two players, writing the board and prompts to `out`.
pub struct Orchestrator<W> {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
    clear_screen: bool,
}

impl<W> Orchestrator<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates an orchestrator for a fresh game.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            state: GameState::new(),
            player_x,
            player_o,
            out,
            clear_screen: true,
        }
    }

    /// Whether to clear the console before each turn.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the orchestrator, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs turns until the game is won or drawn.
    ///
    /// Rejected moves are reported and the same player is asked again.
    /// Errors come only from the output sink or a player that can no
    /// longer produce moves (for example, closed input).
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");

        while !self.state.status().is_over() {
            let mark = self.state.to_move();
            self.show_board().await?;
            self.out
                .write_all(render::turn_prompt(mark).as_bytes())
                .await?;
            self.out.flush().await?;

            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            loop {
                debug!(player = %player.name(), "Waiting for move");
                let (row, col) = player.request_move(&self.state).await?;
                match self.state.apply(row, col) {
                    Ok(next) => {
                        self.state = next;
                        break;
                    }
                    Err(e) => {
                        warn!(player = %player.name(), row, col, error = %e, "Rejected move");
                        self.out.write_all(render::invalid_move().as_bytes()).await?;
                        self.out.flush().await?;
                    }
                }
            }
        }

        let status = self.state.status();
        let winner = match status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        };
        self.show_board().await?;
        self.out
            .write_all(render::game_over(winner).as_bytes())
            .await?;
        self.out.flush().await?;

        info!(?status, board = %self.state.board(), "Game over");
        Ok(status)
    }

    async fn show_board(&mut self) -> Result<()> {
        if self.clear_screen {
            let clear = render::clear_sequence()
                .map_err(|e| anyhow::anyhow!("Failed to build clear sequence: {}", e))?;
            self.out.write_all(clear.as_bytes()).await?;
        }
        self.out
            .write_all(render::board(self.state.board()).as_bytes())
            .await?;
        Ok(())
    }
}
