//! Sinks the interval timer reports to.

/// Button label while the countdown is paused.
pub const START_LABEL: &str = "Start";

/// Button label while the countdown is running.
pub const PAUSE_LABEL: &str = "Pause";

/// Receives every visible change the timer makes.
pub trait TimerObserver {
    /// Remaining time changed; `text` is formatted as `MM:SS`.
    fn display(&mut self, text: &str);

    /// The active mode changed.
    fn mode_label(&mut self, label: &str);

    /// The start/pause button should read `label`.
    fn button_label(&mut self, label: &str);

    /// A new motivational message was selected.
    fn message(&mut self, text: &str);
}

/// Latest value of every timer sink, as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerPanel {
    /// Remaining time, `MM:SS`.
    pub display: String,
    /// Active mode label.
    pub mode_label: String,
    /// Start/pause button label.
    pub button_label: String,
    /// Current motivational message.
    pub message: String,
}

impl Default for TimerPanel {
    fn default() -> Self {
        Self {
            display: String::new(),
            mode_label: String::new(),
            button_label: START_LABEL.to_string(),
            message: String::new(),
        }
    }
}

impl TimerObserver for TimerPanel {
    fn display(&mut self, text: &str) {
        text.clone_into(&mut self.display);
    }

    fn mode_label(&mut self, label: &str) {
        label.clone_into(&mut self.mode_label);
    }

    fn button_label(&mut self, label: &str) {
        label.clone_into(&mut self.button_label);
    }

    fn message(&mut self, text: &str) {
        text.clone_into(&mut self.message);
    }
}
