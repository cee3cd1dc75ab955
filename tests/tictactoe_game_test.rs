//! Tests for the turn and state controller.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_slayer::{
    Board, Game, HeuristicOpponent, Mark, MoveError, Opponent, Outcome, Position,
    SymbolAssignment,
};

/// Replays a fixed list of cells regardless of the board.
struct Scripted {
    moves: Vec<Position>,
}

impl Opponent for Scripted {
    fn choose(&mut self, _board: &Board, _symbols: &SymbolAssignment) -> Option<Position> {
        if self.moves.is_empty() {
            None
        } else {
            Some(self.moves.remove(0))
        }
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn akaza() -> HeuristicOpponent<ChaCha8Rng> {
    HeuristicOpponent::new("Akaza", ChaCha8Rng::seed_from_u64(1))
}

#[test]
fn test_new_game_x_moves_first() {
    let game = Game::new(SymbolAssignment::new(Mark::X));
    assert_eq!(game.to_move(), Mark::X);
    assert!(game.is_human_turn());
    assert_eq!(game.outcome(), Outcome::None);
    assert!(game.history().is_empty());
}

#[test]
fn test_human_as_o_waits_for_opener() {
    let mut game = Game::new(SymbolAssignment::new(Mark::O));
    assert!(game.is_opponent_turn());
    assert_eq!(
        game.place_human(Position::Center),
        Err(MoveError::NotYourTurn(Mark::O))
    );

    let opener = game.place_opponent(&mut akaza()).unwrap();
    assert_eq!(opener, Some(Position::Center));
    assert!(game.is_human_turn());
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::default();
    game.place_human(Position::TopLeft).unwrap();
    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(
        game.place_human(Position::TopCenter),
        Err(MoveError::NotYourTurn(Mark::X))
    );

    game.place_opponent(&mut akaza()).unwrap();
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.board().count(Mark::X), 1);
    assert_eq!(game.board().count(Mark::O), 1);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut game = Game::default();
    game.place_human(Position::Center).unwrap();
    let mut scripted = Scripted {
        moves: vec![Position::Center],
    };
    assert_eq!(
        game.place_opponent(&mut scripted),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    // Rejected placements leave the game untouched.
    assert_eq!(game.history(), &[Position::Center]);
    assert!(game.is_opponent_turn());
}

#[test]
fn test_human_win_ends_game() {
    let mut game = Game::default();
    let mut scripted = Scripted {
        moves: vec![Position::MiddleLeft, Position::MiddleRight],
    };
    game.place_human(Position::TopLeft).unwrap();
    game.place_opponent(&mut scripted).unwrap();
    game.place_human(Position::TopCenter).unwrap();
    game.place_opponent(&mut scripted).unwrap();
    let outcome = game.place_human(Position::TopRight).unwrap();

    assert_eq!(outcome, Outcome::HumanWin);
    assert_eq!(game.outcome(), Outcome::HumanWin);
    assert!(!game.is_human_turn());
    assert!(!game.is_opponent_turn());
    assert_eq!(game.place_human(Position::Center), Err(MoveError::GameOver));
    assert_eq!(game.place_opponent(&mut akaza()), Err(MoveError::GameOver));
}

#[test]
fn test_opponent_centers_blocks_then_wins() {
    let mut game = Game::default();
    let mut opponent = akaza();

    game.place_human(Position::TopLeft).unwrap();
    assert_eq!(game.place_opponent(&mut opponent).unwrap(), Some(Position::Center));

    game.place_human(Position::TopCenter).unwrap();
    assert_eq!(game.place_opponent(&mut opponent).unwrap(), Some(Position::TopRight));

    game.place_human(Position::MiddleRight).unwrap();
    assert_eq!(game.place_opponent(&mut opponent).unwrap(), Some(Position::BottomLeft));
    assert_eq!(game.outcome(), Outcome::OpponentWin);
}

#[test]
fn test_draw_detected_on_last_cell() {
    // X O X / X O O / O X X, human X.
    let mut game = Game::default();
    let mut scripted = Scripted {
        moves: vec![
            Position::TopCenter,
            Position::Center,
            Position::MiddleRight,
            Position::BottomLeft,
        ],
    };
    for pos in [
        Position::TopLeft,
        Position::TopRight,
        Position::MiddleLeft,
        Position::BottomCenter,
    ] {
        assert_eq!(game.place_human(pos).unwrap(), Outcome::None);
        assert!(game.place_opponent(&mut scripted).unwrap().is_some());
    }
    assert_eq!(game.place_human(Position::BottomRight).unwrap(), Outcome::Draw);
}

#[test]
fn test_no_move_is_a_no_op() {
    let mut game = Game::default();
    game.place_human(Position::Center).unwrap();
    let mut empty = Scripted { moves: Vec::new() };
    assert_eq!(game.place_opponent(&mut empty), Ok(None));
    assert!(game.is_opponent_turn());
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_reset_keeps_symbols() {
    let mut game = Game::new(SymbolAssignment::new(Mark::O));
    game.place_opponent(&mut akaza()).unwrap();
    game.reset();
    assert_eq!(game.symbols().human(), Mark::O);
    assert_eq!(game.board(), &Board::new());
    assert!(game.is_opponent_turn());
}

#[test]
fn test_error_messages() {
    assert!(
        MoveError::SquareOccupied(Position::Center)
            .to_string()
            .contains("occupied")
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
}
