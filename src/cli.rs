//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Mark, SeatKind};

/// Strictly Tic-Tac-Toe - console tic-tac-toe with a minimax bot
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Console tic-tac-toe with an unbeatable computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on this console
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Who plays X
        #[arg(long = "x", value_enum)]
        x: Option<SeatKind>,

        /// Who plays O
        #[arg(long = "o", value_enum)]
        o: Option<SeatKind>,

        /// Do not clear the console between turns
        #[arg(long)]
        no_clear: bool,
    },

    /// Print the engine's move for a board snapshot
    BestMove {
        /// Nine cells in row-major order: X, O, and . for empty (e.g. "XX.OO....")
        board: String,

        /// Mark to move for
        #[arg(short, long, default_value = "O")]
        mark: Mark,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
