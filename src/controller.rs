//! The single owner of timer state.
//!
//! `FocusTimer` wires the engine to its settings store and history log.
//! Settings edits are saved immediately; storage and history failures are
//! logged and never interrupt the countdown.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::{Durations, TimerConfig};
use crate::error::Result;
use crate::notify::CompletionSink;
use crate::storage::{HistoryStore, SettingsStore};
use crate::timer::{Completion, Mode, TimerEngine};

/// Timer controller.
pub struct FocusTimer {
    engine: TimerEngine,
    config: TimerConfig,
    store: Box<dyn SettingsStore>,
    history: Option<HistoryStore>,
}

impl FocusTimer {
    /// Load settings once and build the engine from them.
    ///
    /// A missing or unreadable record falls back to the defaults.
    #[must_use]
    pub fn load(
        store: Box<dyn SettingsStore>,
        sink: Box<dyn CompletionSink>,
        history: Option<HistoryStore>,
    ) -> Self {
        let config = match store.load() {
            Ok(Some(config)) => config,
            Ok(None) => TimerConfig::default(),
            Err(e) => {
                warn!(error = %e, "could not load settings, using defaults");
                TimerConfig::default()
            }
        };

        let engine = TimerEngine::new(config.durations, config.alerts(), sink);

        Self {
            engine,
            config,
            store,
            history,
        }
    }

    /// Read-only view of the engine.
    #[must_use]
    pub const fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Start the countdown.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Start or pause.
    pub fn toggle(&mut self) {
        self.engine.toggle();
    }

    /// Reload the full duration of the current mode.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Jump to a mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.engine.set_mode(mode);
    }

    /// Finish the current period now.
    pub fn skip(&mut self) -> Completion {
        let completion = self.engine.skip();
        self.record(&completion);
        completion
    }

    /// Drive the countdown up to `now`.
    pub fn pump(&mut self, now: Instant) -> Option<Completion> {
        let completion = self.engine.pump(now)?;
        self.record(&completion);
        Some(completion)
    }

    /// Replace all durations.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidDuration` if any duration is zero; nothing
    /// is changed or saved in that case.
    pub fn update_durations(&mut self, durations: Durations) -> Result<()> {
        self.engine.update_durations(durations)?;
        self.config.durations = durations;
        self.persist();
        Ok(())
    }

    /// Change one mode's duration by `delta` minutes.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidDuration` if the result would be zero.
    pub fn adjust_duration(&mut self, mode: Mode, delta: i32) -> Result<()> {
        let current = self.config.durations.minutes(mode);
        let minutes = current.saturating_add_signed(delta);
        let durations = self.config.durations.with_minutes(mode, minutes)?;
        self.update_durations(durations)
    }

    /// Turn the completion sound on or off.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.config.sound_enabled = enabled;
        self.engine.set_alerts(self.config.alerts());
        self.persist();
    }

    /// Turn desktop notifications on or off.
    pub fn set_desktop_notifications(&mut self, enabled: bool) {
        self.config.desktop_notifications = enabled;
        self.engine.set_alerts(self.config.alerts());
        self.persist();
    }

    /// Select a colour theme.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.config.theme = theme.into();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.config) {
            warn!(error = %e, "could not save settings");
        }
    }

    fn record(&self, completion: &Completion) {
        info!(
            finished = %completion.finished,
            next = %completion.next,
            session_count = completion.session_count,
            skipped = completion.skipped,
            "period finished"
        );

        if let Some(history) = &self.history {
            if let Err(e) = history.record(completion, Utc::now()) {
                warn!(error = %e, "could not record completed period");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::TimerError;
    use crate::notify::SilentSink;
    use crate::storage::{Database, MemoryStore};

    fn timer_with(store: &MemoryStore) -> FocusTimer {
        FocusTimer::load(Box::new(store.clone()), Box::new(SilentSink), None)
    }

    #[test]
    fn test_load_defaults_when_empty() {
        let store = MemoryStore::default();
        let timer = timer_with(&store);

        assert_eq!(timer.config(), &TimerConfig::default());
        assert_eq!(timer.engine().remaining_seconds(), 25 * 60);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_load_merges_stored_record() {
        let store = MemoryStore::with_record(r#"{ "durations": { "focus": 50 }, "theme": "forest" }"#);
        let timer = timer_with(&store);

        assert_eq!(timer.config().theme, "forest");
        assert_eq!(timer.config().durations.short_break, 5);
        assert_eq!(timer.engine().remaining_seconds(), 50 * 60);
    }

    #[test]
    fn test_load_corrupt_record_uses_defaults() {
        let store = MemoryStore::with_record("not json");
        let timer = timer_with(&store);

        assert_eq!(timer.config(), &TimerConfig::default());
    }

    #[test]
    fn test_every_settings_change_is_saved() {
        let store = MemoryStore::default();
        let mut timer = timer_with(&store);

        timer
            .update_durations(Durations::new(30, 5, 15).unwrap())
            .unwrap();
        timer.set_sound_enabled(false);
        timer.set_desktop_notifications(false);
        timer.set_theme("midnight");

        assert_eq!(store.saves(), 4);
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.durations.focus, 30);
        assert!(!saved.sound_enabled);
        assert!(!saved.desktop_notifications);
        assert_eq!(saved.theme, "midnight");
    }

    #[test]
    fn test_duration_edit_while_idle_applies_immediately() {
        let store = MemoryStore::default();
        let mut timer = timer_with(&store);

        timer
            .update_durations(Durations::new(30, 5, 15).unwrap())
            .unwrap();
        assert_eq!(timer.engine().remaining_seconds(), 1800);
    }

    #[test]
    fn test_invalid_duration_is_not_saved() {
        let store = MemoryStore::default();
        let mut timer = timer_with(&store);

        let err = timer.adjust_duration(Mode::ShortBreak, -5).unwrap_err();
        assert!(matches!(err, TimerError::InvalidDuration { .. }));
        assert_eq!(store.saves(), 0);
        assert_eq!(timer.config().durations.short_break, 5);
    }

    #[test]
    fn test_adjust_duration() {
        let store = MemoryStore::default();
        let mut timer = timer_with(&store);

        timer.adjust_duration(Mode::Focus, 1).unwrap();
        timer.adjust_duration(Mode::LongBreak, -3).unwrap();

        assert_eq!(timer.config().durations.focus, 26);
        assert_eq!(timer.config().durations.long_break, 12);
        assert_eq!(timer.engine().remaining_seconds(), 26 * 60);
    }

    #[test]
    fn test_save_failure_does_not_stop_timer() {
        let store = MemoryStore::failing();
        let mut timer = timer_with(&store);

        timer.set_theme("sunset");
        assert_eq!(timer.config().theme, "sunset");

        timer.start();
        timer.pump(Instant::now() + Duration::from_millis(2_500));
        assert_eq!(timer.engine().remaining_seconds(), 25 * 60 - 2);
    }

    #[test]
    fn test_completions_are_recorded() {
        let store = MemoryStore::default();
        let history = HistoryStore::with_database(Database::open_in_memory().unwrap());
        let mut timer = FocusTimer::load(Box::new(store), Box::new(SilentSink), Some(history));

        timer.skip();
        timer.skip();

        let recent = timer.history.as_ref().unwrap().recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent.iter().all(|r| r.skipped));
        assert!(recent.iter().any(|r| r.mode == Mode::Focus));
        assert!(recent.iter().any(|r| r.mode == Mode::ShortBreak));
    }

    #[test]
    fn test_toggle_and_reset_delegate() {
        let store = MemoryStore::default();
        let mut timer = timer_with(&store);

        timer.toggle();
        assert!(timer.engine().is_running());
        timer.reset();
        assert!(!timer.engine().is_running());

        timer.set_mode(Mode::ShortBreak);
        assert_eq!(timer.engine().remaining_seconds(), 5 * 60);
    }
}
