//! Board evaluation from the human player's point of view.

use super::rules::{check_winner, is_draw};
use super::{Board, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board relative to the human's mark.
///
/// Never stored independently of the board; recomputed after every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    #[default]
    #[display("In progress")]
    None,
    /// The human completed a line.
    #[display("Human wins")]
    HumanWin,
    /// The opponent completed a line.
    #[display("Opponent wins")]
    OpponentWin,
    /// Every cell is filled and no line is complete.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns true once the game can accept no more moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::None)
    }
}

/// Evaluates `board` for the player holding `human`.
///
/// The first completed line in row, column, diagonal order decides the winner.
/// Boards that could not arise in alternating play are accepted as-is.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, human: Mark) -> Outcome {
    match check_winner(board) {
        Some(mark) if mark == human => Outcome::HumanWin,
        Some(_) => Outcome::OpponentWin,
        None if is_draw(board) => Outcome::Draw,
        None => Outcome::None,
    }
}
