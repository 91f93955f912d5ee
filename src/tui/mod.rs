//! Terminal User Interface (TUI) for focus-timer.
//!
//! Shows the countdown, the current mode and session, and a progress gauge.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod theme;
mod ui;

pub use app::App;
pub use event::Action;
pub use theme::Palette;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::controller::FocusTimer;
use crate::error::TimerError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(timer: FocusTimer) -> Result<(), TimerError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TimerError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TimerError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TimerError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(timer);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TimerError> {
    debug!("tui started");

    while !app.should_quit {
        app.on_tick(Instant::now());

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TimerError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events()? {
            app.apply(action);
        }
    }

    debug!("tui stopped");
    Ok(())
}
