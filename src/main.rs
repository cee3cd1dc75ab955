//! Strictly Slayer - Unified CLI
//!
//! Play in the terminal, simulate games headlessly, or evaluate a board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_slayer::{Board, Mark, SlayerConfig, SymbolAssignment, evaluate, select_move};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mark,
            delay_ms,
            seed,
        } => {
            let config = SlayerConfig::load_or_default(&config)?.with_overrides(mark, delay_ms, seed);
            strictly_slayer::tui::run_tui(config, mark.is_some()).await
        }
        Command::Simulate { games, seed, mark } => {
            init_stderr_tracing();
            run_simulation(games, seed, mark)
        }
        Command::Evaluate {
            board,
            mark,
            opponent_move,
            seed,
        } => {
            init_stderr_tracing();
            run_evaluate(&board, mark, opponent_move, seed)
        }
    }
}

/// Log filter for `simulate` and `evaluate` when `RUST_LOG` is unset.
const HEADLESS_LOG_FILTER: &str = "info";

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(HEADLESS_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs headless games and prints the tallies.
#[instrument]
fn run_simulation(games: u32, seed: u64, mark: Mark) -> Result<()> {
    info!("Starting simulation");
    let report = strictly_slayer::simulate(games, SymbolAssignment::new(mark), seed)?;
    println!("{}", report);
    Ok(())
}

/// Prints the outcome of a board and, optionally, the opponent's reply.
#[instrument]
fn run_evaluate(board: &str, mark: Mark, opponent_move: bool, seed: u64) -> Result<()> {
    let board = Board::from_marks(board).context("Invalid --board")?;
    println!("{}\n", board.display());
    println!("Outcome: {}", evaluate(&board, mark));

    if opponent_move {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match select_move(&board, mark.opponent(), mark, &mut rng) {
            Some(pos) => println!("Opponent plays: {} ({})", pos.to_index(), pos),
            None => println!("Opponent has no move"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_headless_filter_defaults_to_info() {
        let filter = EnvFilter::new(HEADLESS_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
