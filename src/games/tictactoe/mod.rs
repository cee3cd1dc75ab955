mod game;
mod opponent;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use game::{Game, MoveError, SymbolAssignment};
pub use opponent::{HeuristicOpponent, Opponent, RandomOpponent, select_move};
pub use outcome::{Outcome, evaluate};
pub use position::Position;
pub use types::{Board, BoardParseError, Mark, Square};
