//! Opponent move selection.
//!
//! The heuristic is greedy and looks one ply ahead: take a winning cell,
//! otherwise block the human's winning cell, otherwise prefer the center, then
//! a random corner, then any random cell. It does not see forks coming, so a
//! human who sets up two threats at once will beat it.

use super::game::SymbolAssignment;
use super::outcome::{Outcome, evaluate};
use super::{Board, Mark, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks the opponent's next cell, or `None` when the board is full.
///
/// Steps 1-3 are deterministic and scan empty cells in ascending index order.
/// Ties among corners and among the remaining cells are broken by `rng`.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    opponent: Mark,
    human: Mark,
    rng: &mut R,
) -> Option<Position> {
    let empty: Vec<Position> = board.empty_positions().collect();
    if empty.is_empty() {
        debug!("No empty cells");
        return None;
    }

    if let Some(pos) = empty
        .iter()
        .copied()
        .find(|&pos| evaluate(&board.with_mark(pos, opponent), human) == Outcome::OpponentWin)
    {
        debug!(position = %pos, "Taking winning cell");
        return Some(pos);
    }

    if let Some(pos) = empty
        .iter()
        .copied()
        .find(|&pos| evaluate(&board.with_mark(pos, human), human) == Outcome::HumanWin)
    {
        debug!(position = %pos, "Blocking human threat");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = corners.choose(rng) {
        debug!(position = %pos, "Taking corner");
        return Some(pos);
    }

    let pos = empty.choose(rng).copied();
    debug!(position = ?pos, "Taking remaining cell");
    pos
}

/// Something that can pick a cell for one side of the board.
pub trait Opponent {
    /// Chooses a cell on `board`, or `None` when there is nothing left to play.
    fn choose(&mut self, board: &Board, symbols: &SymbolAssignment) -> Option<Position>;

    /// Display name for status lines and logs.
    fn name(&self) -> &str;
}

/// The heuristic opponent, owning its source of randomness.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<R> {
    name: String,
    rng: R,
}

impl<R: Rng> HeuristicOpponent<R> {
    /// Creates a heuristic opponent drawing tie-breaks from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Opponent for HeuristicOpponent<R> {
    fn choose(&mut self, board: &Board, symbols: &SymbolAssignment) -> Option<Position> {
        select_move(board, symbols.opponent(), symbols.human(), &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a uniformly random empty cell.
///
/// Stands in for the human when games are simulated headlessly, so it
/// plays the human's mark rather than the opponent's.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    /// Creates a random player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose(&mut self, board: &Board, _symbols: &SymbolAssignment) -> Option<Position> {
        let empty: Vec<Position> = board.empty_positions().collect();
        empty.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
