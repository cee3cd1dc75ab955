//! Command-line interface for strictly_slayer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use strictly_slayer::{DEFAULT_CONFIG_PATH, Mark};

/// Strictly Slayer - Demon Slayer tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_slayer")]
#[command(about = "Demon Slayer tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Mark to play (X moves first); skips the selection screen
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Pause before the opponent moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the opponent's tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit the opponent against a random player and report the tallies
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Seed for both players
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Mark the random player takes
        #[arg(short, long, default_value = "X")]
        mark: Mark,
    },

    /// Evaluate a board given as nine cells, e.g. "XX..O...."
    Evaluate {
        /// Cells in row-major order: X, O, or . for empty
        #[arg(short, long)]
        board: String,

        /// Mark held by the human
        #[arg(short, long, default_value = "X")]
        mark: Mark,

        /// Also print the cell the opponent would choose
        #[arg(long)]
        opponent_move: bool,

        /// Seed for the opponent's tie-breaks
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}
