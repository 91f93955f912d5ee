//! Countdown engine for focus and break periods.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use super::format::format_mmss;
use super::mode::Mode;
use super::ticker::Ticker;
use crate::config::Durations;
use crate::error::Result;
use crate::notify::{CompletionSink, SilentSink};

/// Focus periods per cycle before a long break.
pub const MAX_SESSIONS: u32 = 4;

/// Countdown period.
pub const TICK_PERIOD: std::time::Duration = std::time::Duration::from_secs(1);

/// Which completion alerts are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertFlags {
    /// Play a sound
    pub sound: bool,
    /// Raise a desktop notification
    pub desktop: bool,
}

impl Default for AlertFlags {
    fn default() -> Self {
        Self {
            sound: true,
            desktop: true,
        }
    }
}

/// What happened when a period finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Mode that just finished
    pub finished: Mode,
    /// Mode the engine moved to
    pub next: Mode,
    /// Session count after the transition
    pub session_count: u32,
    /// Seconds that had elapsed in the finished period
    pub duration_seconds: u32,
    /// Whether the period was cut short by a skip
    pub skipped: bool,
}

/// The timer state machine.
///
/// Owns mode, remaining time, session count and the configured durations.
/// Every mode change leaves the engine paused with the full duration of the
/// new mode loaded.
pub struct TimerEngine {
    mode: Mode,
    remaining_seconds: u32,
    period_seconds: u32,
    running: bool,
    session_count: u32,
    durations: Durations,
    alerts: AlertFlags,
    ticker: Option<Ticker>,
    sink: Box<dyn CompletionSink>,
}

impl TimerEngine {
    /// Create an engine paused at the start of the first focus period.
    #[must_use]
    pub fn new(durations: Durations, alerts: AlertFlags, sink: Box<dyn CompletionSink>) -> Self {
        Self {
            mode: Mode::Focus,
            remaining_seconds: durations.seconds(Mode::Focus),
            period_seconds: durations.seconds(Mode::Focus),
            running: false,
            session_count: 1,
            durations,
            alerts,
            ticker: None,
            sink,
        }
    }

    /// Start counting down. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.ticker = Some(Ticker::new(Instant::now(), TICK_PERIOD));
        debug!(mode = %self.mode, remaining = self.remaining_seconds, "timer started");
    }

    /// Stop counting down. No-op if already paused.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.ticker = None;
        debug!(mode = %self.mode, remaining = self.remaining_seconds, "timer paused");
    }

    /// Pause if running, start otherwise.
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completion if this tick finished the period.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            Some(self.complete())
        } else {
            None
        }
    }

    /// Run every tick that has fallen due on the owned ticker by `now`.
    ///
    /// Stops at the first completion; the ticker is gone once the engine
    /// pauses, so leftover due ticks are discarded.
    pub fn pump(&mut self, now: Instant) -> Option<Completion> {
        let due = self.ticker.as_mut().map_or(0, |ticker| ticker.due(now));

        for _ in 0..due {
            if let Some(completion) = self.tick() {
                return Some(completion);
            }
            if !self.running {
                break;
            }
        }
        None
    }

    /// Pause and reload the full duration of the current mode.
    pub fn reset(&mut self) {
        self.pause();
        self.load_period();
    }

    /// Finish the current period now. Same effects as running out of time.
    pub fn skip(&mut self) -> Completion {
        let elapsed = self.elapsed_seconds();
        self.remaining_seconds = 0;
        self.finish(elapsed, true)
    }

    /// Finish the current period: pause, signal completion, move on.
    pub fn complete(&mut self) -> Completion {
        let elapsed = self.elapsed_seconds();
        self.finish(elapsed, false)
    }

    fn finish(&mut self, elapsed: u32, skipped: bool) -> Completion {
        let finished = self.mode;
        self.pause();

        if let Err(e) = self.sink.notify_completion(finished, self.alerts) {
            warn!(mode = %finished, error = %e, "completion alert failed");
        }

        self.advance_mode();

        debug!(
            finished = %finished,
            next = %self.mode,
            session_count = self.session_count,
            skipped,
            "period complete"
        );

        Completion {
            finished,
            next: self.mode,
            session_count: self.session_count,
            duration_seconds: elapsed,
            skipped,
        }
    }

    /// Move to the next mode in the cycle.
    ///
    /// Focus bumps the session count and goes to a short break, or to a long
    /// break (with the count reset to 0) once the count passes
    /// [`MAX_SESSIONS`]. Breaks always return to focus.
    pub fn advance_mode(&mut self) {
        let next = match self.mode {
            Mode::Focus => {
                self.session_count += 1;
                if self.session_count <= MAX_SESSIONS {
                    Mode::ShortBreak
                } else {
                    self.session_count = 0;
                    Mode::LongBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        };
        self.set_mode(next);
    }

    /// Switch mode. Always leaves the timer paused with a full period loaded.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Replace the configured durations.
    ///
    /// An idle timer picks up the new duration for its mode immediately; a
    /// running countdown is left alone until the next reset or mode change.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidDuration` if any duration is zero.
    pub fn update_durations(&mut self, durations: Durations) -> Result<()> {
        durations.validate()?;
        self.durations = durations;
        if !self.running {
            self.load_period();
        }
        Ok(())
    }

    fn load_period(&mut self) {
        self.period_seconds = self.durations.seconds(self.mode);
        self.remaining_seconds = self.period_seconds;
    }

    /// Replace the alert flags passed to the completion sink.
    pub fn set_alerts(&mut self, alerts: AlertFlags) {
        self.alerts = alerts;
    }

    /// Elapsed fraction of the current period, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 1.0;
        }
        f64::from(total.saturating_sub(self.remaining_seconds)) / f64::from(total)
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left in the current period.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Completed focus periods in the current cycle.
    #[must_use]
    pub const fn session_count(&self) -> u32 {
        self.session_count
    }

    /// Configured durations.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        self.durations
    }

    /// Length in seconds of the period that is loaded.
    ///
    /// A duration edited mid-countdown does not change this until the next
    /// reset or mode change.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.period_seconds
    }

    fn elapsed_seconds(&self) -> u32 {
        self.total_seconds().saturating_sub(self.remaining_seconds)
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn time_label(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    /// "Session N of 4" while focusing, the break name otherwise.
    #[must_use]
    pub fn session_label(&self) -> String {
        match self.mode {
            Mode::Focus => format!("Session {} of {MAX_SESSIONS}", self.session_count),
            Mode::ShortBreak | Mode::LongBreak => self.mode.label().to_string(),
        }
    }
}

/// One entry of a simulated cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedPeriod {
    /// Mode of the period
    pub mode: Mode,
    /// Length in minutes
    pub minutes: u32,
    /// Session count while the period runs
    pub session_count: u32,
}

/// Walk the cycle from a fresh engine for `steps` periods.
#[must_use]
pub fn preview_cycle(durations: Durations, steps: usize) -> Vec<PlannedPeriod> {
    let mut engine = TimerEngine::new(durations, AlertFlags::default(), Box::new(SilentSink));
    let mut periods = Vec::new();

    for _ in 0..steps {
        periods.push(PlannedPeriod {
            mode: engine.mode(),
            minutes: durations.minutes(engine.mode()),
            session_count: engine.session_count(),
        });
        engine.advance_mode();
    }

    periods
}
