//! Timer command implementation.
//!
//! `dawn timer run` drives the interval timer from a blocking loop, sleeping
//! until each tick is due and redrawing a single status line.

use std::io::Write;
use std::time::Instant;

use colored::Colorize;

use crate::cli::args::{OutputFormat, TimerCommands};
use crate::config::Config;
use crate::error::DawnError;
use crate::features::motivation::ThreadRngSource;
use crate::features::timer::{
    format::render_progress_bar, parse_minutes, IntervalTimer, Mode, TickOutcome, TimerObserver,
    TimerSettings,
};
use crate::output::{format_modes, format_run};

/// Execute timer subcommands.
///
/// # Errors
///
/// Returns an error if settings are invalid or output formatting fails.
pub fn timer(cmd: TimerCommands, config: &Config, format: OutputFormat) -> Result<String, DawnError> {
    match cmd {
        TimerCommands::Run {
            mode,
            intervals,
            focus,
            short,
            long,
        } => {
            let settings = override_settings(
                config.timer.settings()?,
                focus.as_deref(),
                short.as_deref(),
                long.as_deref(),
            )?;
            run(config, settings, mode, intervals, format)
        }
        TimerCommands::Modes => format_modes(&config.timer.settings()?, format),
    }
}

/// Apply command-line duration overrides.
fn override_settings(
    mut settings: TimerSettings,
    focus: Option<&str>,
    short: Option<&str>,
    long: Option<&str>,
) -> Result<TimerSettings, DawnError> {
    if let Some(value) = focus {
        settings.focus_minutes = parse_minutes(value)?;
    }
    if let Some(value) = short {
        settings.short_break_minutes = parse_minutes(value)?;
    }
    if let Some(value) = long {
        settings.long_break_minutes = parse_minutes(value)?;
    }
    Ok(settings)
}

fn run(
    config: &Config,
    settings: TimerSettings,
    mode: Mode,
    intervals: u32,
    format: OutputFormat,
) -> Result<String, DawnError> {
    if intervals == 0 {
        return Err(DawnError::InvalidArgument(
            "--intervals must be at least 1".to_string(),
        ));
    }

    let picker = config.motivation.picker(Box::new(ThreadRngSource))?;
    let observer = StatusLine::new(format == OutputFormat::Pretty);
    let mut timer = IntervalTimer::new(settings, picker, observer);
    if mode != Mode::Focus {
        timer.set_mode(mode);
    }

    let completed = run_intervals(&mut timer, intervals, &mut SystemPacer);
    format_run(&completed, &timer.state(), format)
}

/// Source of time for the run loop.
pub trait Pacer {
    /// Current instant.
    fn now(&mut self) -> Instant;

    /// Block until `deadline`.
    fn sleep_until(&mut self, deadline: Instant);
}

/// Wall-clock pacing.
pub struct SystemPacer;

impl Pacer for SystemPacer {
    fn now(&mut self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&mut self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Run `intervals` intervals back to back.
///
/// Each interval is started as soon as the previous one completes. Returns
/// the completed transitions in order.
pub fn run_intervals<O: TimerObserver>(
    timer: &mut IntervalTimer<O>,
    intervals: u32,
    pacer: &mut impl Pacer,
) -> Vec<(Mode, Mode)> {
    let mut completed = Vec::new();

    while completed.len() < intervals as usize {
        if !timer.is_running() {
            let now = pacer.now();
            timer.start_or_pause_at(now);
        }

        if let Some(deadline) = timer.next_deadline() {
            pacer.sleep_until(deadline);
        }

        if let Some(TickOutcome::Completed { from, to }) = timer.poll(pacer.now()) {
            completed.push((from, to));
        }
    }

    completed
}

/// Redraws one terminal line as the timer changes.
struct StatusLine {
    enabled: bool,
    mode: String,
    display: String,
    total_seconds: Option<u32>,
}

impl StatusLine {
    const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            mode: String::new(),
            display: String::new(),
            total_seconds: None,
        }
    }

    fn progress(&self) -> f64 {
        let remaining = parse_mmss(&self.display);
        match (self.total_seconds, remaining) {
            (Some(total), Some(remaining)) if total > 0 => {
                1.0 - f64::from(remaining) / f64::from(total)
            }
            _ => 0.0,
        }
    }

    fn redraw(&self) {
        if !self.enabled {
            return;
        }
        let mut stdout = std::io::stdout();
        let _ = write!(
            stdout,
            "\r{:<12} {} {}",
            self.mode.bold(),
            self.display.cyan(),
            render_progress_bar(self.progress(), 30)
        );
        let _ = stdout.flush();
    }
}

impl TimerObserver for StatusLine {
    fn display(&mut self, text: &str) {
        text.clone_into(&mut self.display);
        if self.total_seconds.is_none() {
            self.total_seconds = parse_mmss(text);
        }
        self.redraw();
    }

    fn mode_label(&mut self, label: &str) {
        label.clone_into(&mut self.mode);
        // Next display update carries the new full duration
        self.total_seconds = None;
    }

    fn button_label(&mut self, _label: &str) {}

    fn message(&mut self, text: &str) {
        if self.enabled {
            println!("\n{}", text.italic().dimmed());
        }
    }
}

fn parse_mmss(text: &str) -> Option<u32> {
    let (minutes, seconds) = text.split_once(':')?;
    Some(minutes.parse::<u32>().ok()? * 60 + seconds.parse::<u32>().ok()?)
}
