//! Terminal front end
//!
//! Synchronous event loop: draw, poll for a key with the configured tick
//! rate, apply it to [`App`], repeat until the user quits.

pub mod app;
pub mod ui;

pub use app::{App, AppAction, FormFocus};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use shared::error::AppResult;
use std::io::{self, Stdout};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode and the alternate screen
pub fn setup_terminal() -> AppResult<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Undo [`setup_terminal`]
pub fn restore_terminal(terminal: &mut CrosstermTerminal) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> AppResult<()> {
    tracing::info!("Press 'a' to add a dish, 'q' to quit");
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(app.config.tick_rate())? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && app.handle_key(key) == AppAction::Quit
        {
            tracing::info!(dishes = app.store.len(), "Menu editor exiting");
            return Ok(());
        }
    }
}
