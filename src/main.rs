//! Strictly Tic-Tac-Toe - console game and engine CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_tictactoe::{
    Board, BotPlayer, GameConfig, HumanPlayer, Mark, Orchestrator, Player, SeatKind,
    SharedLines, evaluate, shared_lines,
};
use tokio::io::{BufReader, Stdin};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            no_clear,
        } => run_play(config, x, o, no_clear).await,
        Command::BestMove { board, mark, json } => run_best_move(&board, mark, json),
    }
}

/// Logs go to stderr (or a file) so they never interleave with the board.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
async fn run_play(
    config: Option<PathBuf>,
    x: Option<SeatKind>,
    o: Option<SeatKind>,
    no_clear: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_overrides(x, o, no_clear);

    info!(?config, "Starting console game");

    let input = shared_lines(BufReader::new(tokio::io::stdin()));
    let player_x = build_player(&config, Mark::X, &input);
    let player_o = build_player(&config, Mark::O, &input);

    let mut orchestrator = Orchestrator::new(player_x, player_o, tokio::io::stdout())
        .with_clear_screen(*config.clear_screen());
    let status = orchestrator.run().await?;

    info!(?status, "Game finished");
    Ok(())
}

fn build_player(
    config: &GameConfig,
    mark: Mark,
    input: &SharedLines<BufReader<Stdin>>,
) -> Box<dyn Player> {
    let seat = config.seat(mark);
    match seat.kind() {
        SeatKind::Human => Box::new(HumanPlayer::new(
            seat.name().clone(),
            input.clone(),
            tokio::io::stdout(),
        )),
        SeatKind::Bot => Box::new(BotPlayer::new(seat.name().clone(), mark)),
    }
}

/// Print the engine's choice for a snapshot
#[instrument]
fn run_best_move(board: &str, mark: Mark, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let result = evaluate(&board, mark, mark.opponent());

    if json {
        let value = serde_json::json!({
            "board": board.to_string(),
            "mark": mark,
            "score": result.score(),
            "row": result.best().map(|pos| pos.row()),
            "col": result.best().map(|pos| pos.col()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match result.best() {
        Some(pos) => println!("{} {} (score {})", pos.row(), pos.col(), result.score()),
        None => anyhow::bail!("No move available: board is terminal (score {})", result.score()),
    }
    Ok(())
}
