//! Headless games: heuristic opponent against a random stand-in human.

use crate::games::tictactoe::{
    Game, HeuristicOpponent, MoveError, Opponent, Outcome, RandomOpponent, SymbolAssignment,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

/// Tallies from a batch of simulated games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationReport {
    /// Games won by the stand-in human.
    pub human_wins: u32,
    /// Games won by the heuristic opponent.
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SimulationReport {
    /// Total games recorded.
    pub fn total(&self) -> u32 {
        self.human_wins + self.opponent_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWin => self.human_wins += 1,
            Outcome::OpponentWin => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::None => warn!("Game ended without a terminal outcome"),
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: human {} / opponent {} / draw {}",
            self.total(),
            self.human_wins,
            self.opponent_wins,
            self.draws
        )
    }
}

/// Plays `games` full games and tallies the outcomes.
///
/// The two sides draw from separate ChaCha streams off the same seed, so a
/// fixed seed always reproduces the same report.
#[instrument]
pub fn simulate(
    games: u32,
    symbols: SymbolAssignment,
    seed: u64,
) -> Result<SimulationReport, MoveError> {
    let mut opponent_rng = ChaCha8Rng::seed_from_u64(seed);
    opponent_rng.set_stream(0);
    let mut human_rng = ChaCha8Rng::seed_from_u64(seed);
    human_rng.set_stream(1);

    let mut opponent = HeuristicOpponent::new(crate::theme::OPPONENT_NAME, opponent_rng);
    let mut human = RandomOpponent::new(crate::theme::HUMAN_NAME, human_rng);

    let mut report = SimulationReport::default();
    let mut game = Game::new(symbols);
    for round in 0..games {
        let outcome = play_out(&mut game, &mut human, &mut opponent)?;
        debug!(round, %outcome, moves = game.history().len(), "Game finished");
        report.record(outcome);
        game.reset();
    }

    info!(%report, "Simulation complete");
    Ok(report)
}

fn play_out(
    game: &mut Game,
    human: &mut dyn Opponent,
    opponent: &mut dyn Opponent,
) -> Result<Outcome, MoveError> {
    while !game.outcome().is_terminal() {
        if game.is_human_turn() {
            let Some(pos) = human.choose(game.board(), &game.symbols()) else {
                break;
            };
            game.place_human(pos)?;
        } else if game.place_opponent(opponent)?.is_none() {
            break;
        }
    }
    Ok(game.outcome())
}
