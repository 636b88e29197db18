//! The Focus/Break interval timer.
//!
//! The timer owns its whole state: the active mode, the countdown, the
//! repeating schedule and the focus-cycle counter. Everything visible goes
//! out through a [`TimerObserver`].
//!
//! A countdown that reaches zero completes on that same tick. Completion
//! cancels the schedule, so it can only fire once per interval.

use std::time::Instant;

use serde::Serialize;

use super::format::format_mmss;
use super::mode::{Mode, TimerSettings};
use super::observer::{TimerObserver, PAUSE_LABEL, START_LABEL};
use super::schedule::{RepeatingSchedule, TICK_PERIOD};
use crate::features::motivation::MessagePicker;

/// Snapshot of the timer's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    /// Active mode.
    pub mode: Mode,
    /// Seconds left in the active mode.
    pub seconds_remaining: u32,
    /// Whether the countdown is scheduled.
    pub is_running: bool,
    /// Focus intervals completed since the last long break.
    pub completed_focus_cycles: u32,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Idle,
    /// One second was counted down.
    Counted,
    /// The interval finished and the timer moved to the next mode.
    Completed {
        /// Mode that finished.
        from: Mode,
        /// Mode now loaded.
        to: Mode,
    },
}

/// Interval timer cycling Focus, Short break and Long break.
pub struct IntervalTimer<O: TimerObserver> {
    settings: TimerSettings,
    mode: Mode,
    seconds_remaining: u32,
    completed_focus_cycles: u32,
    schedule: Option<RepeatingSchedule>,
    picker: MessagePicker,
    observer: O,
}

impl<O: TimerObserver> IntervalTimer<O> {
    /// Create a paused timer in Focus mode.
    ///
    /// The observer immediately receives the initial display, mode label and
    /// message.
    pub fn new(settings: TimerSettings, picker: MessagePicker, observer: O) -> Self {
        let mut timer = Self {
            settings,
            mode: Mode::Focus,
            seconds_remaining: settings.seconds(Mode::Focus),
            completed_focus_cycles: 0,
            schedule: None,
            picker,
            observer,
        };
        timer.set_mode(Mode::Focus);
        timer
    }

    /// Load `mode` with its full duration.
    ///
    /// Does not start or stop the countdown.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.seconds_remaining = self.settings.seconds(mode);
        self.observer.mode_label(mode.label());
        self.notify_display();
        let message = self.picker.select();
        self.observer.message(message);
    }

    /// Toggle between running and paused, using the current time.
    pub fn start_or_pause(&mut self) {
        self.start_or_pause_at(Instant::now());
    }

    /// Toggle between running and paused.
    ///
    /// Starting anchors a fresh one-second schedule at `now`. Pausing drops
    /// the schedule and keeps the remaining time as is.
    pub fn start_or_pause_at(&mut self, now: Instant) {
        if self.schedule.take().is_some() {
            log::debug!("paused {} at {}", self.mode, format_mmss(self.seconds_remaining));
            self.observer.button_label(START_LABEL);
        } else {
            log::debug!("started {} at {}", self.mode, format_mmss(self.seconds_remaining));
            self.schedule = Some(RepeatingSchedule::start(now, TICK_PERIOD));
            self.observer.button_label(PAUSE_LABEL);
        }
    }

    /// Count down one second.
    ///
    /// Has no effect unless the timer is running.
    pub fn tick(&mut self) -> TickOutcome {
        if self.schedule.is_none() {
            return TickOutcome::Idle;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            self.notify_display();
            if self.seconds_remaining > 0 {
                return TickOutcome::Counted;
            }
        }

        self.complete()
    }

    /// Apply every tick that fell due since the last poll.
    ///
    /// Stops at the first completed interval. Returns the last outcome, or
    /// `None` if nothing was due.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        let due = self
            .schedule
            .as_mut()
            .map_or(0, |schedule| schedule.take_due(now));

        let mut last = None;
        for _ in 0..due {
            let outcome = self.tick();
            last = Some(outcome);
            if self.schedule.is_none() {
                break;
            }
        }
        last
    }

    /// Stop the countdown and reload the current mode's full duration.
    ///
    /// The focus-cycle count is kept.
    pub fn reset(&mut self) {
        if self.schedule.take().is_some() {
            log::debug!("cancelled schedule on reset");
        }
        self.observer.button_label(START_LABEL);
        self.set_mode(self.mode);
    }

    fn complete(&mut self) -> TickOutcome {
        let from = self.mode;
        self.schedule = None;
        self.observer.button_label(START_LABEL);

        let to = match from {
            Mode::Focus => {
                self.completed_focus_cycles += 1;
                if self.completed_focus_cycles >= self.settings.long_break_every {
                    self.completed_focus_cycles = 0;
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        };

        log::debug!("{from} complete, switching to {to}");
        self.set_mode(to);
        TickOutcome::Completed { from, to }
    }

    fn notify_display(&mut self) {
        let text = format_mmss(self.seconds_remaining);
        self.observer.display(&text);
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        TimerState {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            is_running: self.schedule.is_some(),
            completed_focus_cycles: self.completed_focus_cycles,
        }
    }

    /// Active mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds left in the active mode.
    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Whether the countdown is scheduled.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Focus intervals completed since the last long break.
    #[must_use]
    pub const fn completed_focus_cycles(&self) -> u32 {
        self.completed_focus_cycles
    }

    /// When the next tick is due, if running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.as_ref().map(RepeatingSchedule::next_due)
    }

    /// Fraction of the active mode already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.settings.seconds(self.mode);
        if total == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.seconds_remaining) / f64::from(total)
    }

    /// Durations and cycle policy in use.
    #[must_use]
    pub const fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// The observer receiving updates.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::motivation::picker::tests::ScriptedSource;
    use crate::features::motivation::{ThreadRngSource, TIMER_MESSAGES};
    use crate::features::timer::observer::TimerPanel;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Display(String),
        Mode(String),
        Button(String),
        Message(String),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Recorder {
        fn count(&self, wanted: &Event) -> usize {
            self.events.iter().filter(|e| *e == wanted).count()
        }
    }

    impl TimerObserver for Recorder {
        fn display(&mut self, text: &str) {
            self.events.push(Event::Display(text.to_string()));
        }
        fn mode_label(&mut self, label: &str) {
            self.events.push(Event::Mode(label.to_string()));
        }
        fn button_label(&mut self, label: &str) {
            self.events.push(Event::Button(label.to_string()));
        }
        fn message(&mut self, text: &str) {
            self.events.push(Event::Message(text.to_string()));
        }
    }

    fn panel_timer() -> IntervalTimer<TimerPanel> {
        IntervalTimer::new(
            TimerSettings::default(),
            MessagePicker::with_defaults(),
            TimerPanel::default(),
        )
    }

    fn recording_timer() -> IntervalTimer<Recorder> {
        IntervalTimer::new(
            TimerSettings::default(),
            MessagePicker::with_defaults(),
            Recorder::default(),
        )
    }

    fn state(mode: Mode, seconds: u32, running: bool, cycles: u32) -> TimerState {
        TimerState {
            mode,
            seconds_remaining: seconds,
            is_running: running,
            completed_focus_cycles: cycles,
        }
    }

    /// Start the timer and tick until the current interval completes.
    fn run_interval<O: TimerObserver>(timer: &mut IntervalTimer<O>) -> TickOutcome {
        timer.start_or_pause();
        loop {
            let outcome = timer.tick();
            if outcome != TickOutcome::Counted {
                return outcome;
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let timer = panel_timer();
        assert_eq!(timer.state(), state(Mode::Focus, 1500, false, 0));
        assert_eq!(timer.observer().display, "25:00");
        assert_eq!(timer.observer().mode_label, "Focus");
        assert_eq!(timer.observer().button_label, "Start");
        assert!(!timer.observer().message.is_empty());
    }

    #[test]
    fn test_set_mode_loads_full_duration() {
        let mut timer = panel_timer();
        for mode in Mode::ALL {
            timer.set_mode(mode);
            assert_eq!(timer.seconds_remaining(), timer.settings().seconds(mode));
            assert_eq!(timer.observer().mode_label, mode.label());
        }
        assert_eq!(timer.observer().display, "15:00");
    }

    #[test]
    fn test_set_mode_keeps_running_flag() {
        let mut timer = panel_timer();
        timer.start_or_pause();
        timer.set_mode(Mode::ShortBreak);
        assert!(timer.is_running());
        assert_eq!(timer.seconds_remaining(), 300);
    }

    #[test]
    fn test_start_then_tick_once() {
        let mut timer = panel_timer();
        timer.start_or_pause();
        assert_eq!(timer.tick(), TickOutcome::Counted);

        assert_eq!(timer.seconds_remaining(), 1499);
        assert_eq!(timer.observer().display, "24:59");
        assert_eq!(timer.observer().button_label, "Pause");
        assert!(timer.is_running());
    }

    #[test]
    fn test_tick_while_paused_is_idle() {
        let mut timer = panel_timer();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.seconds_remaining(), 1500);
    }

    #[test]
    fn test_full_focus_interval_completes_once() {
        let mut timer = recording_timer();
        timer.start_or_pause();

        let mut completions = 0;
        for _ in 0..1500 {
            if let TickOutcome::Completed { from, to } = timer.tick() {
                assert_eq!((from, to), (Mode::Focus, Mode::ShortBreak));
                completions += 1;
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(timer.state(), state(Mode::ShortBreak, 300, false, 1));
        assert_eq!(timer.observer().count(&Event::Display("00:00".to_string())), 1);
        assert!(matches!(
            timer.observer().events.last(),
            Some(Event::Message(_))
        ));

        // Further ticks do nothing until restarted
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.seconds_remaining(), 300);
    }

    #[test]
    fn test_completion_order_of_notifications() {
        let mut timer = recording_timer();
        timer.set_mode(Mode::ShortBreak);
        timer.start_or_pause();
        for _ in 0..299 {
            timer.tick();
        }
        timer.observer_mut().events.clear();

        timer.tick();
        let events = &timer.observer().events;
        assert_eq!(events[0], Event::Display("00:00".to_string()));
        assert_eq!(events[1], Event::Button("Start".to_string()));
        assert_eq!(events[2], Event::Mode("Focus".to_string()));
        assert_eq!(events[3], Event::Display("25:00".to_string()));
        assert!(matches!(events[4], Event::Message(_)));
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn test_fourth_focus_earns_long_break() {
        let mut timer = panel_timer();

        for cycle in 1..=3 {
            assert_eq!(
                run_interval(&mut timer),
                TickOutcome::Completed {
                    from: Mode::Focus,
                    to: Mode::ShortBreak
                }
            );
            assert_eq!(timer.completed_focus_cycles(), cycle);
            assert_eq!(
                run_interval(&mut timer),
                TickOutcome::Completed {
                    from: Mode::ShortBreak,
                    to: Mode::Focus
                }
            );
        }

        assert_eq!(
            run_interval(&mut timer),
            TickOutcome::Completed {
                from: Mode::Focus,
                to: Mode::LongBreak
            }
        );
        assert_eq!(timer.state(), state(Mode::LongBreak, 900, false, 0));

        assert_eq!(
            run_interval(&mut timer),
            TickOutcome::Completed {
                from: Mode::LongBreak,
                to: Mode::Focus
            }
        );
        assert_eq!(timer.state(), state(Mode::Focus, 1500, false, 0));
    }

    #[test]
    fn test_custom_long_break_threshold() {
        let settings = TimerSettings {
            focus_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 2,
            long_break_every: 2,
        };
        let mut timer =
            IntervalTimer::new(settings, MessagePicker::with_defaults(), TimerPanel::default());

        run_interval(&mut timer);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        run_interval(&mut timer);
        run_interval(&mut timer);
        assert_eq!(timer.state(), state(Mode::LongBreak, 120, false, 0));
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut timer = panel_timer();
        run_interval(&mut timer);
        assert_eq!(timer.state(), state(Mode::ShortBreak, 300, false, 1));

        timer.start_or_pause();
        for _ in 0..42 {
            timer.tick();
        }
        assert_eq!(timer.seconds_remaining(), 258);

        timer.reset();
        assert_eq!(timer.state(), state(Mode::ShortBreak, 300, false, 1));
        assert_eq!(timer.observer().display, "05:00");
        assert_eq!(timer.observer().button_label, "Start");
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_reset_while_paused() {
        let mut timer = panel_timer();
        timer.start_or_pause();
        timer.tick();
        timer.start_or_pause();

        timer.reset();
        assert_eq!(timer.state(), state(Mode::Focus, 1500, false, 0));
    }

    #[test]
    fn test_double_toggle_restores_running_flag() {
        let mut timer = recording_timer();
        timer.start_or_pause();
        timer.start_or_pause();

        assert!(!timer.is_running());
        assert!(timer.next_deadline().is_none());
        assert_eq!(timer.observer().count(&Event::Button("Pause".to_string())), 1);
        assert_eq!(timer.observer().count(&Event::Button("Start".to_string())), 1);

        timer.start_or_pause();
        timer.start_or_pause();
        timer.start_or_pause();
        assert!(timer.is_running());
        assert!(timer.next_deadline().is_some());
    }

    #[test]
    fn test_pause_keeps_remaining_time() {
        let mut timer = panel_timer();
        timer.start_or_pause();
        for _ in 0..10 {
            timer.tick();
        }
        timer.start_or_pause();
        assert_eq!(timer.seconds_remaining(), 1490);
        assert_eq!(timer.tick(), TickOutcome::Idle);

        timer.start_or_pause();
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 1489);
    }

    #[test]
    fn test_poll_applies_elapsed_seconds() {
        let mut timer = panel_timer();
        let start = Instant::now();
        timer.start_or_pause_at(start);

        assert_eq!(timer.poll(start + Duration::from_millis(500)), None);
        assert_eq!(
            timer.poll(start + Duration::from_millis(3200)),
            Some(TickOutcome::Counted)
        );
        assert_eq!(timer.seconds_remaining(), 1497);
        assert_eq!(timer.observer().display, "24:57");

        // Same instant again: already consumed
        assert_eq!(timer.poll(start + Duration::from_millis(3200)), None);
    }

    #[test]
    fn test_poll_stops_at_completion() {
        let mut timer = panel_timer();
        timer.set_mode(Mode::ShortBreak);
        let start = Instant::now();
        timer.start_or_pause_at(start);

        let outcome = timer.poll(start + Duration::from_secs(1000));
        assert_eq!(
            outcome,
            Some(TickOutcome::Completed {
                from: Mode::ShortBreak,
                to: Mode::Focus
            })
        );
        assert_eq!(timer.state(), state(Mode::Focus, 1500, false, 0));
        assert_eq!(timer.poll(start + Duration::from_secs(2000)), None);
    }

    #[test]
    fn test_poll_after_pause_does_nothing() {
        let mut timer = panel_timer();
        let start = Instant::now();
        timer.start_or_pause_at(start);
        timer.start_or_pause_at(start + Duration::from_millis(400));

        assert_eq!(timer.poll(start + Duration::from_secs(10)), None);
        assert_eq!(timer.seconds_remaining(), 1500);
    }

    #[test]
    fn test_restart_anchors_new_schedule() {
        let mut timer = panel_timer();
        let start = Instant::now();
        timer.start_or_pause_at(start);
        timer.start_or_pause_at(start + Duration::from_millis(900));
        timer.start_or_pause_at(start + Duration::from_secs(5));

        assert_eq!(
            timer.next_deadline(),
            Some(start + Duration::from_secs(6))
        );
        assert_eq!(timer.poll(start + Duration::from_millis(5999)), None);
        assert_eq!(timer.poll(start + Duration::from_secs(6)), Some(TickOutcome::Counted));
        assert_eq!(timer.seconds_remaining(), 1499);
    }

    #[test]
    fn test_messages_come_from_candidate_list() {
        let mut timer = IntervalTimer::new(
            TimerSettings::default(),
            MessagePicker::new(
                TIMER_MESSAGES.iter().map(|s| (*s).to_string()).collect(),
                Box::new(ThreadRngSource),
            )
            .unwrap(),
            TimerPanel::default(),
        );
        for mode in Mode::ALL.iter().cycle().take(30) {
            timer.set_mode(*mode);
            let message = timer.observer().message.as_str();
            assert!(TIMER_MESSAGES.contains(&message));
        }
    }

    #[test]
    fn test_scripted_messages_follow_mode_changes() {
        let picker = MessagePicker::new(
            vec!["first".to_string(), "second".to_string()],
            Box::new(ScriptedSource::new(vec![0, 1, 1])),
        )
        .unwrap();
        let mut timer = IntervalTimer::new(TimerSettings::default(), picker, TimerPanel::default());
        assert_eq!(timer.observer().message, "first");

        timer.set_mode(Mode::LongBreak);
        assert_eq!(timer.observer().message, "second");

        timer.reset();
        assert_eq!(timer.observer().message, "second");
    }

    #[test]
    fn test_progress() {
        let mut timer = panel_timer();
        assert!(timer.progress().abs() < f64::EPSILON);

        timer.set_mode(Mode::ShortBreak);
        timer.start_or_pause();
        for _ in 0..150 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }
}
