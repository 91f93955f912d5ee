//! JSON output formatting.

use serde::Serialize;
use serde_json::json;

use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::storage::{ModeSummary, PeriodRecord};
use crate::timer::PlannedPeriod;

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, TimerError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format the settings record as JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if serialization fails.
pub fn format_config_json(config: &TimerConfig) -> Result<String, TimerError> {
    config.to_json()
}

/// Format completed periods as JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if serialization fails.
pub fn format_history_json(records: &[PeriodRecord]) -> Result<String, TimerError> {
    let output = json!({
        "count": records.len(),
        "items": records
    });
    to_json(&output)
}

/// Format per-mode totals as JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if serialization fails.
pub fn format_summary_json(summaries: &[ModeSummary]) -> Result<String, TimerError> {
    let output = json!({
        "period": "today",
        "modes": summaries
    });
    to_json(&output)
}

/// Format a cycle preview as JSON.
///
/// # Errors
///
/// Returns `TimerError::Parse` if serialization fails.
pub fn format_preview_json(periods: &[PlannedPeriod]) -> Result<String, TimerError> {
    let total: u32 = periods.iter().map(|p| p.minutes).sum();
    let output = json!({
        "count": periods.len(),
        "total_minutes": total,
        "items": periods
    });
    to_json(&output)
}
