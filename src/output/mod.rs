//! Output formatting for dawn.
//!
//! This module provides formatters for displaying dawn data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::DawnError;
use crate::features::motivation::Card;
use crate::features::notes::NotesView;
use crate::features::timer::{Mode, TimerSettings, TimerState};

pub use json::*;
pub use pretty::*;

/// Format mode durations based on output format
///
/// # Errors
///
/// Returns `DawnError::Json` if JSON serialization fails.
pub fn format_modes(settings: &TimerSettings, format: OutputFormat) -> Result<String, DawnError> {
    match format {
        OutputFormat::Pretty => Ok(format_modes_pretty(settings)),
        OutputFormat::Json => format_modes_json(settings),
    }
}

/// Format the motivation board based on output format
///
/// # Errors
///
/// Returns `DawnError::Json` if JSON serialization fails.
pub fn format_cards(cards: &[Card], format: OutputFormat) -> Result<String, DawnError> {
    match format {
        OutputFormat::Pretty => Ok(format_cards_pretty(cards)),
        OutputFormat::Json => format_cards_json(cards),
    }
}

/// Format the notes pad based on output format
///
/// # Errors
///
/// Returns `DawnError::Json` if JSON serialization fails.
pub fn format_notes(
    view: &NotesView,
    updated_at: Option<&str>,
    format: OutputFormat,
) -> Result<String, DawnError> {
    match format {
        OutputFormat::Pretty => Ok(format_notes_pretty(view)),
        OutputFormat::Json => format_notes_json(view, updated_at),
    }
}

/// Format a motivational message based on output format
///
/// # Errors
///
/// Returns `DawnError::Json` if JSON serialization fails.
pub fn format_message(message: &str, format: OutputFormat) -> Result<String, DawnError> {
    match format {
        OutputFormat::Pretty => Ok(format_message_pretty(message)),
        OutputFormat::Json => to_json(&serde_json::json!({ "message": message })),
    }
}

/// Format a finished timer run based on output format
///
/// # Errors
///
/// Returns `DawnError::Json` if JSON serialization fails.
pub fn format_run(
    completed: &[(Mode, Mode)],
    state: &TimerState,
    format: OutputFormat,
) -> Result<String, DawnError> {
    match format {
        OutputFormat::Pretty => Ok(format_run_pretty(completed, state)),
        OutputFormat::Json => format_run_json(completed, state),
    }
}
