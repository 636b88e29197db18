//! Duration parsing and formatting for the timer.

use chrono::Duration;

use crate::error::DawnError;

/// Format a second count as zero-padded `MM:SS`.
///
/// Minutes grow past two digits only for durations of 100 minutes or more.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is read as minutes. Values too large to represent yield
/// `None`.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<i64>() {
        return if minutes > 0 {
            Duration::try_minutes(minutes)
        } else {
            None
        };
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else if current_num.is_empty() {
            return None;
        } else {
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            let unit = match c {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
        }
    }

    // Trailing number without a unit counts as minutes
    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    if total_seconds > 0 {
        Duration::try_seconds(total_seconds)
    } else {
        None
    }
}

/// Parse a mode length given on the command line into whole minutes.
///
/// # Errors
///
/// Returns `DawnError::InvalidArgument` if the value is not a positive whole
/// number of minutes.
pub fn parse_minutes(s: &str) -> Result<u32, DawnError> {
    let duration = parse_duration(s)
        .ok_or_else(|| DawnError::InvalidArgument(format!("Invalid duration: {s}")))?;

    if duration.num_seconds() % 60 != 0 {
        return Err(DawnError::InvalidArgument(format!(
            "Duration must be whole minutes: {s}"
        )));
    }

    u32::try_from(duration.num_minutes())
        .map_err(|_| DawnError::InvalidArgument(format!("Duration too long: {s}")))
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
