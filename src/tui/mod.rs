//! Terminal front-end for Strictly Slayer.

mod app;
mod input;
mod ui;

pub use app::{App, KeyOutcome, Screen};
pub use input::{digit_position, move_cursor};

use crate::SlayerConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the game in the terminal until the user quits.
///
/// Logs go to the configured file so they don't tear the screen.
pub async fn run_tui(config: SlayerConfig, skip_select: bool) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,strictly_slayer=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Strictly Slayer TUI");

    let rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let app = App::new(rng, *config.human_mark(), skip_select);

    enable_raw_mode()?;
    let mut terminal = enter_screen(io::stdout(), restore_terminal)?;

    let res = run_app(&mut terminal, app, config.opponent_delay()).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Switches `out` to the alternate screen and wraps it in a terminal.
///
/// Expects raw mode to be on; `restore` runs before any error is returned.
fn enter_screen<W: io::Write>(
    mut out: W,
    restore: impl FnOnce(),
) -> io::Result<Terminal<CrosstermBackend<W>>> {
    let entered = match execute!(out, EnterAlternateScreen, EnableMouseCapture) {
        Ok(()) => Terminal::new(CrosstermBackend::new(out)),
        Err(e) => Err(e),
    };
    entered.inspect_err(|e| {
        error!(error = %e, "Terminal setup failed");
        restore();
    })
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[instrument(skip_all, fields(delay_ms = delay.as_millis() as u64))]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    delay: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.awaiting_opponent() {
            tokio::time::sleep(delay).await;
            // The board is locked while the opponent thinks.
            while event::poll(Duration::ZERO)? {
                let _ = event::read()?;
            }
            app.opponent_move();
            continue;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports both press and release on some platforms.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key.code) == KeyOutcome::Quit {
                return Ok(());
            }
        }
    }
}
