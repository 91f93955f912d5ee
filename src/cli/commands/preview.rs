//! Cycle preview command.

use crate::cli::args::OutputFormat;
use crate::error::TimerError;
use crate::output::format_preview;
use crate::storage::SettingsStore;
use crate::timer::preview_cycle;

/// Show the next `steps` periods using the stored durations.
///
/// # Errors
///
/// Returns an error if the settings cannot be read or output formatting
/// fails.
pub fn preview(
    store: &dyn SettingsStore,
    steps: usize,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let settings = store.load()?.unwrap_or_default();
    let periods = preview_cycle(settings.durations, steps);
    format_preview(&periods, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_preview_uses_stored_durations() {
        let store = MemoryStore::with_record(r#"{ "durations": { "focus": 50, "longBreak": 30 } }"#);
        let output = preview(&store, 8, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["items"][0]["minutes"], 50);
        assert_eq!(value["items"][7]["mode"], "long-break");
        assert_eq!(value["items"][7]["minutes"], 30);
        assert_eq!(value["total_minutes"], 4 * 50 + 3 * 5 + 30);
    }

    #[test]
    fn test_preview_zero_steps() {
        let store = MemoryStore::default();
        let output = preview(&store, 0, OutputFormat::Json).unwrap();
        assert!(output.contains("\"count\": 0"));
    }
}
