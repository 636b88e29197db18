//! Timer modes and their durations.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the three interval kinds the timer cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Work interval (25 minutes by default).
    #[value(alias = "f", alias = "pomodoro")]
    Focus,
    /// Short break (5 minutes by default).
    #[value(alias = "short", alias = "s")]
    ShortBreak,
    /// Long break (15 minutes by default).
    #[value(alias = "long", alias = "l")]
    LongBreak,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Human-readable label shown on the page.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short break",
            Self::LongBreak => "Long break",
        }
    }

    /// Check if this is a break mode.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Durations and cycle policy for an [`IntervalTimer`](super::IntervalTimer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Focus interval length in minutes.
    pub focus_minutes: u32,
    /// Short break length in minutes.
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    pub long_break_minutes: u32,
    /// Completed focus intervals that earn a long break.
    pub long_break_every: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_every: 4,
        }
    }
}

impl TimerSettings {
    /// Configured length of `mode` in minutes.
    #[must_use]
    pub const fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured length of `mode` in seconds.
    #[must_use]
    pub const fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode).saturating_mul(60)
    }
}
