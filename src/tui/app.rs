//! Application state for the TUI.

use std::time::Instant;

use crate::controller::FocusTimer;
use crate::timer::{Completion, Mode};
use crate::tui::event::Action;
use crate::tui::theme::{next_theme, Palette};

/// Key reference shown in the status bar.
pub const HELP_TEXT: &str =
    "Space:start/pause | r:reset | s:skip | 1/2/3:mode | +/-:minutes | t:theme | m:sound | n:notify | q:quit";

/// Application state.
pub struct App {
    /// The timer being driven.
    pub timer: FocusTimer,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the help line is shown.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app around `timer`.
    #[must_use]
    pub fn new(timer: FocusTimer) -> Self {
        Self {
            timer,
            status: Some("Press Space to start, ? for help".to_string()),
            show_help: false,
            should_quit: false,
        }
    }

    /// Palette of the current theme.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::for_theme(&self.timer.config().theme)
    }

    /// Advance the countdown to `now`.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(completion) = self.timer.pump(now) {
            self.announce(&completion);
        }
    }

    /// Apply a user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Toggle => {
                self.timer.toggle();
                self.status = Some(
                    if self.timer.engine().is_running() {
                        "Running"
                    } else {
                        "Paused"
                    }
                    .to_string(),
                );
            }
            Action::Reset => {
                self.timer.reset();
                self.status = Some("Reset".to_string());
            }
            Action::Skip => {
                let completion = self.timer.skip();
                self.announce(&completion);
            }
            Action::SelectMode(mode) => self.select_mode(mode),
            Action::Adjust(delta) => self.adjust(delta),
            Action::CycleTheme => {
                let theme = next_theme(&self.timer.config().theme);
                self.timer.set_theme(theme);
                self.status = Some(format!("Theme: {theme}"));
            }
            Action::ToggleSound => {
                let enabled = !self.timer.config().sound_enabled;
                self.timer.set_sound_enabled(enabled);
                self.status = Some(format!("Sound {}", on_off(enabled)));
            }
            Action::ToggleNotifications => {
                let enabled = !self.timer.config().desktop_notifications;
                self.timer.set_desktop_notifications(enabled);
                self.status = Some(format!("Notifications {}", on_off(enabled)));
            }
            Action::Help => self.show_help = !self.show_help,
        }
    }

    fn select_mode(&mut self, mode: Mode) {
        self.timer.set_mode(mode);
        self.status = Some(format!("{mode} selected"));
    }

    fn adjust(&mut self, delta: i32) {
        let mode = self.timer.engine().mode();
        self.status = Some(match self.timer.adjust_duration(mode, delta) {
            Ok(()) => format!(
                "{mode}: {} min",
                self.timer.config().durations.minutes(mode)
            ),
            Err(e) => e.to_string(),
        });
    }

    fn announce(&mut self, completion: &Completion) {
        let verb = if completion.skipped { "skipped" } else { "finished" };
        self.status = Some(format!(
            "{} {verb}. Up next: {}",
            completion.finished, completion.next
        ));
    }
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::SilentSink;
    use crate::storage::MemoryStore;

    fn app() -> (App, MemoryStore) {
        let store = MemoryStore::default();
        let timer = FocusTimer::load(Box::new(store.clone()), Box::new(SilentSink), None);
        (App::new(timer), store)
    }

    #[test]
    fn test_toggle_starts_and_pauses() {
        let (mut app, _) = app();

        app.apply(Action::Toggle);
        assert!(app.timer.engine().is_running());
        assert_eq!(app.status.as_deref(), Some("Running"));

        app.apply(Action::Toggle);
        assert!(!app.timer.engine().is_running());
    }

    #[test]
    fn test_skip_announces_next_mode() {
        let (mut app, _) = app();

        app.apply(Action::Skip);
        assert_eq!(app.timer.engine().mode(), Mode::ShortBreak);
        assert_eq!(
            app.status.as_deref(),
            Some("Focus skipped. Up next: Short Break")
        );
    }

    #[test]
    fn test_adjust_below_one_minute_reports_error() {
        let (mut app, store) = app();
        app.apply(Action::SelectMode(Mode::ShortBreak));

        for _ in 0..4 {
            app.apply(Action::Adjust(-1));
        }
        assert_eq!(app.timer.config().durations.short_break, 1);

        app.apply(Action::Adjust(-1));
        assert_eq!(app.timer.config().durations.short_break, 1);
        assert!(app.status.as_deref().unwrap_or("").contains("invalid duration"));
        assert_eq!(store.saves(), 4);
    }

    #[test]
    fn test_settings_toggles_persist() {
        let (mut app, store) = app();

        app.apply(Action::CycleTheme);
        app.apply(Action::ToggleSound);
        app.apply(Action::ToggleNotifications);

        let saved = crate::storage::SettingsStore::load(&store).unwrap().unwrap();
        assert_eq!(saved.theme, "forest");
        assert!(!saved.sound_enabled);
        assert!(!saved.desktop_notifications);
        assert_eq!(app.palette(), Palette::for_theme("forest"));
    }

    #[test]
    fn test_quit_and_help() {
        let (mut app, _) = app();

        app.apply(Action::Help);
        assert!(app.show_help);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_on_tick_while_paused_is_noop() {
        let (mut app, _) = app();
        app.on_tick(Instant::now());
        assert_eq!(app.timer.engine().remaining_seconds(), 25 * 60);
    }
}
