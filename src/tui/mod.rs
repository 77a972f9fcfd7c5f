//! Terminal UI for Strictly Tic-Tac-Toe.

mod app;
mod input;
mod ui;

pub use app::{App, Control, NameField, SETUP_MESSAGE, Screen};
pub use input::{digit_to_index, move_cursor};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the TUI until the user quits.
pub fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Tic-Tac-Toe TUI");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(&config);

    let result = run_loop(&mut terminal, &mut app);
    if let Err(e) = &result {
        error!(error = %e, "TUI loop failed");
    }

    restore_terminal(&mut terminal)?;
    info!("TUI exited");
    result
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, wait for one key, handle it, repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key) == Control::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
