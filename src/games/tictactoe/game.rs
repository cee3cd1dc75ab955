//! Turn and state controller for a single game against the opponent.

use super::opponent::Opponent;
use super::outcome::{Outcome, evaluate};
use super::{Board, Mark, Position, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which mark the human plays. The opponent plays the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolAssignment {
    human: Mark,
}

impl SymbolAssignment {
    /// Assigns `human` to the human player.
    pub fn new(human: Mark) -> Self {
        Self { human }
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The opponent's mark.
    pub fn opponent(&self) -> Mark {
        self.human.opponent()
    }
}

impl Default for SymbolAssignment {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

/// Error that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already reached a terminal outcome.
    #[display("Game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}

/// One game instance: created when the human picks a mark, mutated once per
/// accepted move, and reset for the next battle.
///
/// X always moves first, so a human playing O waits for the opponent's opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    symbols: SymbolAssignment,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new(symbols: SymbolAssignment) -> Self {
        Self {
            board: Board::new(),
            symbols,
            to_move: Mark::X,
            outcome: Outcome::None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbol assignment.
    pub fn symbols(&self) -> SymbolAssignment {
        self.symbols
    }

    /// Returns the mark due to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the outcome as of the last placement.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True while the game is live and waiting on the human.
    pub fn is_human_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.to_move == self.symbols.human()
    }

    /// True while the game is live and waiting on the opponent.
    pub fn is_opponent_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.to_move == self.symbols.opponent()
    }

    /// Places the human's mark at `pos`.
    #[instrument(skip(self), fields(human = %self.symbols.human()))]
    pub fn place_human(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        self.place(pos, self.symbols.human())
    }

    /// Asks `opponent` for a cell and places the opponent's mark there.
    ///
    /// `Ok(None)` means the opponent had no move; nothing is placed.
    #[instrument(skip(self, opponent), fields(opponent_name = %opponent.name()))]
    pub fn place_opponent(
        &mut self,
        opponent: &mut dyn Opponent,
    ) -> Result<Option<Position>, MoveError> {
        let mark = self.symbols.opponent();
        self.check_turn(mark)?;

        let Some(pos) = opponent.choose(&self.board, &self.symbols) else {
            debug!("Opponent has no move");
            return Ok(None);
        };

        self.place(pos, mark)?;
        Ok(Some(pos))
    }

    /// Clears the board for a new battle with the same symbol assignment.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new(self.symbols);
    }

    fn check_turn(&self, mark: Mark) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != mark {
            return Err(MoveError::NotYourTurn(mark));
        }
        Ok(())
    }

    fn place(&mut self, pos: Position, mark: Mark) -> Result<Outcome, MoveError> {
        self.check_turn(mark)?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(mark));
        self.history.push(pos);
        self.to_move = mark.opponent();
        self.outcome = evaluate(&self.board, self.symbols.human());

        debug!(%mark, position = %pos, outcome = %self.outcome, "Mark placed");
        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SymbolAssignment::default())
    }
}
