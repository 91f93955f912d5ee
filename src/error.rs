//! Error types for focus-timer.

use thiserror::Error;

use crate::timer::Mode;

/// Errors produced by the timer, its settings and its collaborators.
#[derive(Debug, Error)]
pub enum TimerError {
    /// Configuration or environment problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Settings or history storage failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized or parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A duration of zero minutes was supplied.
    #[error("invalid duration for {mode}: {minutes} minutes (must be at least 1)")]
    InvalidDuration {
        /// Mode the duration was meant for.
        mode: Mode,
        /// Rejected value.
        minutes: u32,
    },

    /// A desktop notification or sound could not be delivered.
    #[error("notification failed: {0}")]
    Notification(String),

    /// Terminal setup or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for TimerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<rusqlite::Error> for TimerError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result alias using [`TimerError`].
pub type Result<T> = std::result::Result<T, TimerError>;
