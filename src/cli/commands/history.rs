//! History command implementation.

use chrono::{DateTime, Local, NaiveTime, Utc};
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{HistoryArgs, OutputFormat};
use crate::error::TimerError;
use crate::output::{format_history, format_summary, to_json};
use crate::storage::HistoryStore;

/// Execute the history command.
///
/// # Errors
///
/// Returns an error if the history database cannot be queried, or if
/// `--clear` is given without `--force`.
pub fn history(
    store: &HistoryStore,
    args: &HistoryArgs,
    format: OutputFormat,
) -> Result<String, TimerError> {
    if args.clear {
        return clear(store, args.force, format);
    }

    if args.today {
        let summaries = store.summary_since(start_of_today())?;
        return format_summary(&summaries, format);
    }

    let records = store.recent(args.limit)?;
    format_history(&records, format)
}

fn clear(store: &HistoryStore, force: bool, format: OutputFormat) -> Result<String, TimerError> {
    if !force {
        return Err(TimerError::Config(
            "This deletes every recorded period. Re-run with --force to confirm.".to_string(),
        ));
    }

    let removed = store.clear()?;

    match format {
        OutputFormat::Json => to_json(&json!({ "cleared": removed })),
        OutputFormat::Pretty => Ok(format!("Cleared {removed} periods").green().to_string()),
    }
}

/// Local midnight, expressed in UTC.
fn start_of_today() -> DateTime<Utc> {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    midnight
        .and_local_timezone(Local)
        .earliest()
        .map_or_else(|| midnight.and_utc(), |t| t.with_timezone(&Utc))
}
