//! The focus timer state machine.
//!
//! Provides the countdown engine and its supporting types:
//! - Modes and the focus/break cycle
//! - The periodic tick handle
//! - MM:SS and progress formatting

mod engine;
mod format;
mod mode;
mod ticker;

pub use engine::{preview_cycle, AlertFlags, Completion, PlannedPeriod, TimerEngine, MAX_SESSIONS, TICK_PERIOD};
pub use format::{format_duration, format_mmss, render_progress_bar};
pub use mode::Mode;
pub use ticker::Ticker;
