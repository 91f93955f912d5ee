//! Output formatting for focus-timer.
//!
//! This module provides formatters for settings, history and cycle previews.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::storage::{ModeSummary, PeriodRecord};
use crate::timer::PlannedPeriod;

pub use json::*;
pub use pretty::*;

/// Format settings based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_config(config: &TimerConfig, format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config)),
        OutputFormat::Json => format_config_json(config),
    }
}

/// Format completed periods based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_history(records: &[PeriodRecord], format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format per-mode totals based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_summary(summaries: &[ModeSummary], format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summaries)),
        OutputFormat::Json => format_summary_json(summaries),
    }
}

/// Format a cycle preview based on output format
///
/// # Errors
///
/// Returns `TimerError::Parse` if JSON serialization fails.
pub fn format_preview(periods: &[PlannedPeriod], format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_preview_pretty(periods)),
        OutputFormat::Json => format_preview_json(periods),
    }
}
