//! Timer settings.
//!
//! The settings record is stored as one JSON document:
//!
//! ```json
//! {
//!   "theme": "ocean",
//!   "durations": { "focus": 25, "shortBreak": 5, "longBreak": 15 },
//!   "soundEnabled": true,
//!   "desktopNotifications": true
//! }
//! ```
//!
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TimerError};
use crate::timer::{AlertFlags, Mode};

/// Theme used when none is stored.
pub const DEFAULT_THEME: &str = "ocean";

/// Themes the terminal UI knows how to draw.
pub const THEMES: [&str; 5] = ["ocean", "forest", "sunset", "midnight", "lavender"];

/// Period lengths in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Durations {
    /// Focus period length.
    #[serde(default = "default_focus")]
    pub focus: u32,
    /// Short break length.
    #[serde(default = "default_short_break")]
    pub short_break: u32,
    /// Long break length.
    #[serde(default = "default_long_break")]
    pub long_break: u32,
}

/// User preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimerConfig {
    /// Colour theme identifier.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Period lengths.
    pub durations: Durations,
    /// Ring the bell when a period ends.
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    /// Raise a desktop notification when a period ends.
    #[serde(default = "default_true")]
    pub desktop_notifications: bool,
}

// Default value functions for serde
const fn default_focus() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            focus: default_focus(),
            short_break: default_short_break(),
            long_break: default_long_break(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            durations: Durations::default(),
            sound_enabled: default_true(),
            desktop_notifications: default_true(),
        }
    }
}

impl Durations {
    /// Build validated durations.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidDuration` if any value is zero.
    pub fn new(focus: u32, short_break: u32, long_break: u32) -> Result<Self> {
        let durations = Self {
            focus,
            short_break,
            long_break,
        };
        durations.validate()?;
        Ok(durations)
    }

    /// Check that every duration is at least one minute.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidDuration` naming the first zero duration.
    pub fn validate(&self) -> Result<()> {
        for mode in Mode::ALL {
            let minutes = self.minutes(mode);
            if minutes == 0 {
                return Err(TimerError::InvalidDuration { mode, minutes });
            }
        }
        Ok(())
    }

    /// Length of `mode` in minutes.
    #[must_use]
    pub const fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Length of `mode` in seconds.
    #[must_use]
    pub const fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode).saturating_mul(60)
    }

    /// Copy with one mode's length replaced.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidDuration` if `minutes` is zero.
    pub fn with_minutes(&self, mode: Mode, minutes: u32) -> Result<Self> {
        let mut updated = *self;
        updated.set_minutes(mode, minutes);
        updated.validate()?;
        Ok(updated)
    }

    fn set_minutes(&mut self, mode: Mode, minutes: u32) {
        match mode {
            Mode::Focus => self.focus = minutes,
            Mode::ShortBreak => self.short_break = minutes,
            Mode::LongBreak => self.long_break = minutes,
        }
    }
}

impl TimerConfig {
    /// Parse a stored record, merging it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Parse` if the record is not valid JSON.
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        Ok(config.sanitized())
    }

    /// Serialize the record.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace unusable stored values with defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Durations::default();
        for mode in Mode::ALL {
            if self.durations.minutes(mode) == 0 {
                warn!(mode = %mode, "stored duration is zero, using default");
                self.durations.set_minutes(mode, defaults.minutes(mode));
            }
        }

        if self.theme.trim().is_empty() {
            warn!("stored theme is empty, using default");
            self.theme = default_theme();
        }

        self
    }

    /// Alert flags for the completion sink.
    #[must_use]
    pub const fn alerts(&self) -> AlertFlags {
        AlertFlags {
            sound: self.sound_enabled,
            desktop: self.desktop_notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimerConfig::default();

        assert_eq!(config.theme, "ocean");
        assert_eq!(config.durations.focus, 25);
        assert_eq!(config.durations.short_break, 5);
        assert_eq!(config.durations.long_break, 15);
        assert!(config.sound_enabled);
        assert!(config.desktop_notifications);
    }

    #[test]
    fn test_record_field_names() {
        let json = TimerConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["theme"], "ocean");
        assert_eq!(value["durations"]["focus"], 25);
        assert_eq!(value["durations"]["shortBreak"], 5);
        assert_eq!(value["durations"]["longBreak"], 15);
        assert_eq!(value["soundEnabled"], true);
        assert_eq!(value["desktopNotifications"], true);
    }

    #[test]
    fn test_partial_config() {
        let config =
            TimerConfig::from_json(r#"{ "durations": { "focus": 45 }, "soundEnabled": false }"#)
                .unwrap();

        // Custom values should be loaded
        assert_eq!(config.durations.focus, 45);
        assert!(!config.sound_enabled);
        // Defaults should be used for missing fields
        assert_eq!(config.durations.short_break, 5);
        assert_eq!(config.durations.long_break, 15);
        assert!(config.desktop_notifications);
        assert_eq!(config.theme, "ocean");
    }

    #[test]
    fn test_zero_duration_in_record_falls_back() {
        let config =
            TimerConfig::from_json(r#"{ "theme": "", "durations": { "focus": 0, "longBreak": 20 } }"#)
                .unwrap();

        assert_eq!(config.durations.focus, 25);
        assert_eq!(config.durations.long_break, 20);
        assert_eq!(config.theme, "ocean");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            TimerConfig::from_json("{ not json"),
            Err(TimerError::Parse(_))
        ));
    }

    #[test]
    fn test_durations_validation() {
        assert!(Durations::new(25, 5, 15).is_ok());
        assert!(matches!(
            Durations::new(25, 5, 0),
            Err(TimerError::InvalidDuration {
                mode: Mode::LongBreak,
                ..
            })
        ));
    }

    #[test]
    fn test_with_minutes() {
        let durations = Durations::default().with_minutes(Mode::Focus, 50).unwrap();
        assert_eq!(durations.focus, 50);
        assert_eq!(durations.seconds(Mode::Focus), 3000);
        assert!(Durations::default().with_minutes(Mode::ShortBreak, 0).is_err());
    }

    #[test]
    fn test_alerts() {
        let config = TimerConfig {
            sound_enabled: false,
            ..TimerConfig::default()
        };
        assert_eq!(
            config.alerts(),
            AlertFlags {
                sound: false,
                desktop: true
            }
        );
    }
}
