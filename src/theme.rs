//! Demon Slayer theming for status lines and the result screen.

use crate::games::tictactoe::Outcome;

/// Name shown for the human side.
pub const HUMAN_NAME: &str = "You";

/// Name shown for the opponent side.
pub const OPPONENT_NAME: &str = "Akaza";

/// Status line while the opponent's move is pending.
pub const THINKING: &str = "Akaza is thinking...";

/// Toast shown whenever a new game begins.
pub const NEW_BATTLE: &str = "A new battle begins!";

/// The character presented on the result screen for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Champion {
    name: &'static str,
    message: &'static str,
    tagline: &'static str,
}

impl Champion {
    /// Character name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// What the character says about the battle.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// One-line summary under the message.
    pub fn tagline(&self) -> &'static str {
        self.tagline
    }
}

/// Returns the champion for a terminal outcome, `None` while the game runs.
pub fn champion(outcome: Outcome) -> Option<Champion> {
    match outcome {
        Outcome::HumanWin => Some(Champion {
            name: "Tanjiro Kamado",
            message: "Your determination burns bright like the flames of the sun!",
            tagline: "Victory achieved through compassion and strength!",
        }),
        Outcome::OpponentWin => Some(Champion {
            name: "Akaza",
            message: "The demon's power overwhelms! Your technique needs refinement.",
            tagline: "Destructive force claims another victory!",
        }),
        Outcome::Draw => Some(Champion {
            name: "Nezuko Kamado",
            message: "A perfectly balanced battle! Both warriors showed great skill.",
            tagline: "Harmony prevails in this gentle stalemate!",
        }),
        Outcome::None => None,
    }
}

/// Result screen headline.
pub fn headline(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HumanWin => "Player Wins!",
        Outcome::OpponentWin => "AI Wins!",
        Outcome::Draw => "Draw!",
        Outcome::None => "",
    }
}

/// Toast announcing the end of a game.
pub fn toast(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::HumanWin => Some("Victory is yours!"),
        Outcome::OpponentWin => Some("The demon prevails!"),
        Outcome::Draw => Some("A balanced battle!"),
        Outcome::None => None,
    }
}
