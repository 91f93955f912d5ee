//! Completion alerts.
//!
//! The engine reports every finished period to a [`CompletionSink`]. Sinks
//! decide from the alert flags whether to ring and/or notify.

mod desktop;

pub use desktop::DesktopSink;

use crate::error::Result;
use crate::timer::{AlertFlags, Mode};

/// Notification title for a finished period.
pub const COMPLETION_TITLE: &str = "Timer Complete!";

/// Receives the completion signal of the timer engine.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionSink {
    /// Called once per finished period with the mode that just ended.
    ///
    /// # Errors
    ///
    /// Returns an error if a sound or notification could not be delivered.
    /// The engine logs it and carries on.
    fn notify_completion(&mut self, mode: Mode, alerts: AlertFlags) -> Result<()>;
}

/// Sink that ignores completions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl CompletionSink for SilentSink {
    fn notify_completion(&mut self, _mode: Mode, _alerts: AlertFlags) -> Result<()> {
        Ok(())
    }
}

/// Notification body for a finished period.
#[must_use]
pub fn completion_message(mode: Mode) -> String {
    let finished = match mode {
        Mode::Focus => "Focus session",
        Mode::ShortBreak => "Short break",
        Mode::LongBreak => "Long break",
    };
    let next = if mode.is_break() {
        "focus session"
    } else {
        "break"
    };
    format!("{finished} is finished. Time for a {next}!")
}
