//! Strictly Slayer - Demon Slayer themed tic-tac-toe
//!
//! A single human plays against Akaza, a greedy one-ply opponent.
//!
//! # Architecture
//!
//! - **Evaluator**: [`evaluate`] classifies a board for the human's mark
//! - **Opponent**: [`select_move`] picks win, block, center, corner, then any cell
//! - **Controller**: [`Game`] enforces turns and recomputes the outcome
//! - **Front-end**: a ratatui terminal UI with a themed result screen
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use strictly_slayer::{Board, Mark, Outcome, Position, evaluate, select_move};
//!
//! let board = Board::from_marks("....OO...").unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let pos = select_move(&board, Mark::O, Mark::X, &mut rng);
//! assert_eq!(pos, Some(Position::MiddleLeft));
//!
//! let after = board.with_mark(Position::MiddleLeft, Mark::O);
//! assert_eq!(evaluate(&after, Mark::X), Outcome::OpponentWin);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod simulate;
pub mod theme;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, SlayerConfig};

// Crate-level exports - Simulation
pub use simulate::{SimulationReport, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Game, HeuristicOpponent, Mark, MoveError, Opponent, Outcome, Position,
    RandomOpponent, Square, SymbolAssignment, evaluate, rules, select_move,
};
