//! Configuration management for focus-timer.
//!
//! This module resolves the data directory and defines the settings record.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Durations, TimerConfig, DEFAULT_THEME, THEMES};
