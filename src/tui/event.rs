//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TimerError;
use crate::timer::Mode;

/// How long to wait for input before redrawing.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    Toggle,
    /// Reload the current mode's full duration.
    Reset,
    /// Finish the current period now.
    Skip,
    /// Jump to a mode.
    SelectMode(Mode),
    /// Change the current mode's duration by this many minutes.
    Adjust(i32),
    /// Switch to the next theme.
    CycleTheme,
    /// Turn the sound on or off.
    ToggleSound,
    /// Turn desktop notifications on or off.
    ToggleNotifications,
    /// Show or hide the key reference.
    Help,
}

/// Wait up to [`POLL_TIMEOUT`] for a key press.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, TimerError> {
    if event::poll(POLL_TIMEOUT)
        .map_err(|e| TimerError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| TimerError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(action_for_key(key));
            }
        }
    }

    Ok(None)
}

/// Map a key to its action.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('s') => Action::Skip,
        KeyCode::Char('1') => Action::SelectMode(Mode::Focus),
        KeyCode::Char('2') => Action::SelectMode(Mode::ShortBreak),
        KeyCode::Char('3') => Action::SelectMode(Mode::LongBreak),
        KeyCode::Char('+' | '=') => Action::Adjust(1),
        KeyCode::Char('-') => Action::Adjust(-1),
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Char('m') => Action::ToggleSound,
        KeyCode::Char('n') => Action::ToggleNotifications,
        KeyCode::Char('?') => Action::Help,
        _ => return None,
    };

    Some(action)
}
