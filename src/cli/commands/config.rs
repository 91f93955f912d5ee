//! Settings command implementation.

use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::output::format_config;
use crate::storage::SettingsStore;

/// Execute config subcommands.
///
/// Every change is written back to `store` before the updated settings are
/// returned.
///
/// # Errors
///
/// Returns an error if the stored record cannot be read or written, or if a
/// duration is invalid.
pub fn config(
    store: &dyn SettingsStore,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let mut settings = store.load()?.unwrap_or_default();

    match cmd {
        ConfigCommands::Show => return format_config(&settings, format),
        ConfigCommands::Set { mode, minutes } => {
            settings.durations = settings.durations.with_minutes(mode, minutes)?;
            info!(%mode, minutes, "duration changed");
        }
        ConfigCommands::Sound { state } => settings.sound_enabled = state.is_on(),
        ConfigCommands::Notifications { state } => {
            settings.desktop_notifications = state.is_on();
        }
        ConfigCommands::Theme { name } => settings.theme = name,
        ConfigCommands::Reset => settings = TimerConfig::default(),
    }

    store.save(&settings)?;
    format_config(&settings, format)
}
