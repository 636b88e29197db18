//! Focus/Break interval timer.
//!
//! Provides the Pomodoro-style countdown at the heart of dawn:
//! - Focus, Short break and Long break modes
//! - A one-second repeating schedule with pause/resume
//! - Automatic mode transitions with a long break every few focus intervals
//! - Display, label and message notifications through [`TimerObserver`]

pub mod format;
pub mod interval;
pub mod mode;
pub mod observer;
pub mod schedule;

pub use format::{format_duration, format_mmss, parse_duration, parse_minutes};
pub use interval::{IntervalTimer, TickOutcome, TimerState};
pub use mode::{Mode, TimerSettings};
pub use observer::{TimerObserver, TimerPanel, PAUSE_LABEL, START_LABEL};
pub use schedule::{RepeatingSchedule, TICK_PERIOD};
