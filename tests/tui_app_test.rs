//! Tests for the terminal app state machine, driven by key codes.

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_slayer::tui::{App, KeyOutcome, Screen};
use strictly_slayer::{Mark, Outcome, Position, theme};

fn app(initial: Mark, skip_select: bool) -> App {
    App::new(ChaCha8Rng::seed_from_u64(5), initial, skip_select)
}

#[test]
fn test_starts_on_symbol_select() {
    let app = app(Mark::X, false);
    assert_eq!(app.screen(), Screen::SymbolSelect { selected: Mark::X });
    assert!(!app.awaiting_opponent());
}

#[test]
fn test_selecting_o_hands_opener_to_opponent() {
    let mut app = app(Mark::X, false);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.screen(), Screen::SymbolSelect { selected: Mark::O });
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.screen(), Screen::Playing);
    assert_eq!(app.game().symbols().human(), Mark::O);
    assert!(app.awaiting_opponent());

    app.opponent_move();
    assert!(!app.awaiting_opponent());
    assert!(!app.game().board().is_empty(Position::Center));
}

#[test]
fn test_digit_places_and_hands_turn_over() {
    let mut app = app(Mark::X, true);
    assert_eq!(app.screen(), Screen::Playing);
    assert!(app.status().starts_with(theme::NEW_BATTLE));

    app.handle_key(KeyCode::Char('1'));
    assert!(!app.game().board().is_empty(Position::TopLeft));
    assert!(app.awaiting_opponent());
    assert_eq!(app.status(), theme::THINKING);

    // Input is ignored until the opponent has moved.
    app.handle_key(KeyCode::Char('2'));
    assert!(app.game().board().is_empty(Position::TopCenter));
}

#[test]
fn test_cursor_and_enter_place_mark() {
    let mut app = app(Mark::X, true);
    assert_eq!(app.cursor(), Position::Center);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);
    assert_eq!(app.cursor(), Position::TopLeft);
    app.handle_key(KeyCode::Enter);
    assert!(!app.game().board().is_empty(Position::TopLeft));
}

#[test]
fn test_occupied_cell_shows_message() {
    let mut app = app(Mark::X, true);
    app.handle_key(KeyCode::Char('1'));
    app.opponent_move();
    app.handle_key(KeyCode::Char('1'));
    assert!(app.status().contains("occupied"));
    assert!(app.game().is_human_turn());
}

#[test]
fn test_game_reaches_result_screen() {
    let mut app = app(Mark::X, true);
    // Opponent answers 1 with center, 2 with a block at 3, then wins on 7.
    for key in ['1', '2', '6'] {
        app.handle_key(KeyCode::Char(key));
        app.opponent_move();
    }
    assert_eq!(app.screen(), Screen::Finished);
    assert_eq!(app.game().outcome(), Outcome::OpponentWin);
    assert_eq!(Some(app.status()), theme::toast(Outcome::OpponentWin));

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.screen(), Screen::Playing);
    assert!(app.game().history().is_empty());
}

#[test]
fn test_switch_symbol_from_result_screen() {
    let mut app = app(Mark::X, true);
    for key in ['1', '2', '6'] {
        app.handle_key(KeyCode::Char(key));
        app.opponent_move();
    }
    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.screen(), Screen::SymbolSelect { selected: Mark::X });
    app.handle_key(KeyCode::Char('o'));
    assert_eq!(app.game().symbols().human(), Mark::O);
}

#[test]
fn test_quit() {
    let mut app = app(Mark::X, false);
    assert_eq!(app.handle_key(KeyCode::Char('x')), KeyOutcome::Continue);
    assert_eq!(app.handle_key(KeyCode::Char('q')), KeyOutcome::Quit);
}
