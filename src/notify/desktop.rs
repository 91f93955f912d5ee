//! Terminal bell and desktop notification sink.

use std::io::Write;

use notify_rust::Notification;
use tracing::debug;

use super::{completion_message, CompletionSink, COMPLETION_TITLE};
use crate::error::{Result, TimerError};
use crate::timer::{AlertFlags, Mode};

/// Rings the terminal bell and raises a desktop notification.
#[derive(Debug, Clone)]
pub struct DesktopSink {
    app_name: String,
}

impl DesktopSink {
    /// Create a sink that posts notifications under `app_name`.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    // The bell goes to stderr so it never mixes into command output.
    fn ring_bell(out: &mut impl Write) -> std::io::Result<()> {
        out.write_all(b"\x07")?;
        out.flush()
    }

    fn show_notification(&self, mode: Mode) -> Result<()> {
        Notification::new()
            .appname(&self.app_name)
            .summary(COMPLETION_TITLE)
            .body(&completion_message(mode))
            .show()
            .map_err(|e| TimerError::Notification(e.to_string()))?;
        Ok(())
    }
}

impl Default for DesktopSink {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl CompletionSink for DesktopSink {
    fn notify_completion(&mut self, mode: Mode, alerts: AlertFlags) -> Result<()> {
        let mut failures = Vec::new();

        if alerts.sound {
            if let Err(e) = Self::ring_bell(&mut std::io::stderr()) {
                failures.push(format!("bell: {e}"));
            }
        }

        if alerts.desktop {
            if let Err(e) = self.show_notification(mode) {
                failures.push(e.to_string());
            }
        }

        debug!(mode = %mode, sound = alerts.sound, desktop = alerts.desktop, "completion alert");

        if failures.is_empty() {
            Ok(())
        } else {
            Err(TimerError::Notification(failures.join("; ")))
        }
    }
}
