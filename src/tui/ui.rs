//! Stateless rendering for the symbol picker, the board and the result screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{App, Screen};
use crate::games::tictactoe::{Board, Mark, Outcome, Position, Square, SymbolAssignment, rules};
use crate::theme;

const HUMAN_COLOR: Color = Color::Green;
const OPPONENT_COLOR: Color = Color::Red;
const DRAW_COLOR: Color = Color::Magenta;

/// Renders whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_title(frame, chunks[0]);

    let help = match app.screen() {
        Screen::SymbolSelect { selected } => {
            draw_symbol_select(frame, chunks[1], selected);
            "←/→ switch mark · Enter confirm · x/o pick · q quit"
        }
        Screen::Playing => {
            draw_playing(frame, chunks[1], app);
            "Arrows move · Enter place · 1-9 place · r reset battle · q quit"
        }
        Screen::Finished => {
            draw_result(frame, chunks[1], app);
            "Enter/r play again · s switch mark · q quit"
        }
    };

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Demon Slayer",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Tic-Tac-Toe"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn draw_symbol_select(frame: &mut Frame, area: Rect, selected: Mark) {
    let option = |mark: Mark| {
        let label = format!("  {}  ", mark);
        let style = if mark == selected {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(label, style.add_modifier(Modifier::BOLD))
    };

    let text = vec![
        Line::from("Choose your mark. X strikes first."),
        Line::from(""),
        Line::from(vec![option(Mark::X), Span::raw("    "), option(Mark::O)]),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, 40, 3));
}

fn draw_playing(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(11)])
        .split(area);

    frame.render_widget(badges(game.symbols(), app.awaiting_opponent()), rows[0]);
    draw_board(
        frame,
        rows[1],
        game.board(),
        game.symbols(),
        Some(app.cursor()),
        &[],
    );
}

fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let outcome = game.outcome();
    let color = match outcome {
        Outcome::HumanWin => HUMAN_COLOR,
        Outcome::OpponentWin => OPPONENT_COLOR,
        _ => DRAW_COLOR,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(11)])
        .split(area);

    let mut text = vec![Line::from(Span::styled(
        theme::headline(outcome),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(champion) = theme::champion(outcome) {
        text.push(Line::from(Span::styled(
            champion.name(),
            Style::default().fg(color),
        )));
        text.push(Line::from(champion.message()));
        text.push(Line::from(Span::styled(
            champion.tagline(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(card, rows[0]);

    let highlight = rules::winning_line(game.board())
        .map(|(line, _)| line.to_vec())
        .unwrap_or_default();
    draw_board(frame, rows[1], game.board(), game.symbols(), None, &highlight);
}

fn badges(symbols: SymbolAssignment, thinking: bool) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{}: {}", theme::HUMAN_NAME, symbols.human()),
            Style::default().fg(HUMAN_COLOR),
        ),
        Span::raw("    "),
        Span::styled(
            format!("{}: {}", theme::OPPONENT_NAME, symbols.opponent()),
            Style::default().fg(OPPONENT_COLOR),
        ),
    ];
    if thinking {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            theme::THINKING,
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    symbols: SymbolAssignment,
    cursor: Option<Position>,
    highlight: &[Position],
) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [0, 2, 4].into_iter().enumerate() {
        draw_row(frame, rows[chunk], row, board, symbols, cursor, highlight);
        if chunk < 4 {
            draw_separator(frame, rows[chunk + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    row: usize,
    board: &Board,
    symbols: SymbolAssignment,
    cursor: Option<Position>,
    highlight: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        let Some(pos) = Position::from_index(row * 3 + col) else {
            continue;
        };
        draw_cell(frame, cols[col * 2], board, symbols, pos, cursor, highlight);
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    symbols: SymbolAssignment,
    pos: Position,
    cursor: Option<Position>,
    highlight: &[Position],
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => {
            let color = if mark == symbols.human() {
                HUMAN_COLOR
            } else {
                OPPONENT_COLOR
            };
            (
                mark.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlight.contains(&pos) {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
