//! Application state and key handling for the terminal game.

use crate::games::tictactoe::{
    Game, HeuristicOpponent, Mark, MoveError, Opponent, Outcome, Position, SymbolAssignment,
};
use crate::theme;
use crossterm::event::KeyCode;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing X or O. Confirming creates the game instance.
    SymbolSelect {
        /// Currently highlighted mark.
        selected: Mark,
    },
    /// The board is live.
    Playing,
    /// A terminal outcome was reached.
    Finished,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    game: Game,
    cursor: Position,
    status: String,
    opponent: HeuristicOpponent<ChaCha8Rng>,
}

impl App {
    /// Creates the app with `initial` highlighted on the selection screen.
    ///
    /// With `skip_select` the game starts straight away with `initial`.
    #[instrument(skip(rng))]
    pub fn new(rng: ChaCha8Rng, initial: Mark, skip_select: bool) -> Self {
        let mut app = Self {
            screen: Screen::SymbolSelect { selected: initial },
            game: Game::default(),
            cursor: Position::Center,
            status: "Choose your mark".to_string(),
            opponent: HeuristicOpponent::new(theme::OPPONENT_NAME, rng),
        };
        if skip_select {
            app.start_game(initial);
        }
        app
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True when the loop should pause and then call [`App::opponent_move`].
    pub fn awaiting_opponent(&self) -> bool {
        self.screen == Screen::Playing && self.game.is_opponent_turn()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> KeyOutcome {
        if key == KeyCode::Char('q') || key == KeyCode::Esc {
            info!("User quit");
            return KeyOutcome::Quit;
        }

        match self.screen {
            Screen::SymbolSelect { selected } => match key {
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                    self.screen = Screen::SymbolSelect {
                        selected: selected.opponent(),
                    };
                }
                KeyCode::Char('x') | KeyCode::Char('X') => self.start_game(Mark::X),
                KeyCode::Char('o') | KeyCode::Char('O') => self.start_game(Mark::O),
                KeyCode::Enter | KeyCode::Char(' ') => self.start_game(selected),
                _ => {}
            },
            Screen::Playing => match key {
                KeyCode::Char('r') => self.new_battle(),
                KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
                KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                    self.cursor = move_cursor(self.cursor, key);
                }
                other => {
                    if let Some(pos) = digit_position(other) {
                        self.cursor = pos;
                        self.play(pos);
                    }
                }
            },
            Screen::Finished => match key {
                KeyCode::Enter | KeyCode::Char('r') => self.new_battle(),
                KeyCode::Char('s') => {
                    self.screen = Screen::SymbolSelect {
                        selected: self.game.symbols().human(),
                    };
                    self.status = "Choose your mark".to_string();
                }
                _ => {}
            },
        }
        KeyOutcome::Continue
    }

    /// Lets the opponent take its turn.
    #[instrument(skip(self))]
    pub fn opponent_move(&mut self) {
        match self.game.place_opponent(&mut self.opponent) {
            Ok(Some(pos)) => {
                debug!(position = %pos, "Opponent moved");
                self.status = format!("{} played {}", self.opponent.name(), pos.label());
                self.after_placement();
            }
            Ok(None) => debug!("Opponent had no move"),
            Err(e) => warn!(error = %e, "Opponent move rejected"),
        }
    }

    fn start_game(&mut self, mark: Mark) {
        info!(%mark, "Starting game");
        self.game = Game::new(SymbolAssignment::new(mark));
        self.begin();
    }

    fn new_battle(&mut self) {
        self.game.reset();
        self.begin();
    }

    fn begin(&mut self) {
        self.screen = Screen::Playing;
        self.cursor = Position::Center;
        self.status = if self.game.is_opponent_turn() {
            format!("{} {}", theme::NEW_BATTLE, theme::THINKING)
        } else {
            format!("{} Your move.", theme::NEW_BATTLE)
        };
    }

    fn play(&mut self, pos: Position) {
        if !self.game.is_human_turn() {
            return;
        }
        match self.game.place_human(pos) {
            Ok(_) => {
                self.status = theme::THINKING.to_string();
                self.after_placement();
            }
            Err(e @ MoveError::SquareOccupied(_)) => {
                debug!(error = %e, "Ignoring move");
                self.status = e.to_string();
            }
            Err(e) => warn!(error = %e, "Move rejected"),
        }
    }

    fn after_placement(&mut self) {
        let outcome = self.game.outcome();
        if let Some(toast) = theme::toast(outcome) {
            info!(%outcome, "Game over");
            self.status = toast.to_string();
            self.screen = Screen::Finished;
        } else if outcome == Outcome::None && self.game.is_human_turn() {
            self.status.push_str(" Your move.");
        }
    }
}
