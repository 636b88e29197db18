//! The repeating one-second schedule that drives the countdown.
//!
//! A [`RepeatingSchedule`] is a plain value: holding it means the countdown is
//! scheduled, dropping it cancels every future firing. The driver asks it how
//! many periods have elapsed since the last check, so a slow event loop never
//! loses a second and never applies one twice.

use std::time::{Duration, Instant};

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A fixed-period recurring deadline.
#[derive(Debug, Clone)]
pub struct RepeatingSchedule {
    period: Duration,
    next_due: Instant,
}

impl RepeatingSchedule {
    /// Start a schedule whose first firing is one period after `now`.
    #[must_use]
    pub fn start(now: Instant, period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Number of firings that fell due at or before `now`.
    ///
    /// Each counted firing is consumed; the next call only reports newer ones.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while self.next_due <= now {
            due += 1;
            self.next_due += self.period;
        }
        due
    }

    /// When the next firing is due.
    #[must_use]
    pub const fn next_due(&self) -> Instant {
        self.next_due
    }
}
