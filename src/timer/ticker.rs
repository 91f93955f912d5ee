//! The periodic tick source owned by a running engine.

use std::time::{Duration, Instant};

/// Handle for a repeating callback with a fixed period.
///
/// Exists only while the engine is running. Dropping it is the cancellation.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Schedule the first tick one period after `started`.
    #[must_use]
    pub fn new(started: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: started + period,
        }
    }

    /// Number of ticks that have fallen due by `now`; advances the schedule.
    ///
    /// Late polls catch up on every missed period rather than dropping them.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut count = 0;
        while now >= self.next_due {
            count += 1;
            self.next_due += self.period;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_before_first_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, Duration::from_secs(1));
        assert_eq!(ticker.due(start), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(999)), 0);
    }

    #[test]
    fn test_catches_up_on_missed_periods() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, Duration::from_secs(1));
        assert_eq!(ticker.due(start + Duration::from_millis(3500)), 3);
        assert_eq!(ticker.due(start + Duration::from_millis(3900)), 0);
        assert_eq!(ticker.due(start + Duration::from_secs(4)), 1);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, Duration::ZERO);
        assert_eq!(ticker.due(start), 0);
        assert_eq!(ticker.due(start + Duration::from_millis(3)), 3);
    }
}
