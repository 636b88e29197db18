//! Notes command implementation.

use colored::Colorize;

use crate::cli::args::{NotesCommands, OutputFormat};
use crate::config::Paths;
use crate::error::DawnError;
use crate::features::notes::{
    NotesPad, NotesStore, SaveOutcome, SqliteNotesStore, SAVE_FAILED_MESSAGE,
};
use crate::output::format_notes;

/// Execute notes subcommands.
///
/// # Errors
///
/// Returns an error if a save fails or output formatting fails. Notes that
/// cannot be read are shown as unavailable instead.
pub fn notes(cmd: NotesCommands, paths: &Paths, format: OutputFormat) -> Result<String, DawnError> {
    let store = SqliteNotesStore::open(paths);
    let pad = NotesPad::new(store);

    match cmd {
        NotesCommands::Show => show(&pad, format),
        NotesCommands::Add { text } => add(&pad, &text.join(" "), format),
    }
}

fn show(pad: &NotesPad<SqliteNotesStore>, format: OutputFormat) -> Result<String, DawnError> {
    let view = pad.load();
    let updated_at = pad.store().updated_at().unwrap_or_else(|e| {
        log::warn!("could not read notes timestamp: {e}");
        None
    });
    format_notes(&view, updated_at.as_deref(), format)
}

fn add<S: NotesStore>(
    pad: &NotesPad<S>,
    text: &str,
    format: OutputFormat,
) -> Result<String, DawnError> {
    let outcome = pad
        .append(text)
        .map_err(|_| DawnError::Database(SAVE_FAILED_MESSAGE.to_string()))?;

    match outcome {
        SaveOutcome::Ignored => Err(DawnError::InvalidArgument(
            "Note is empty; nothing saved".to_string(),
        )),
        SaveOutcome::Saved(_) => {
            let view = pad.load();
            match format {
                OutputFormat::Json => format_notes(&view, None, format),
                OutputFormat::Pretty => Ok(format!(
                    "{} Saved. {} entries on the pad.",
                    "✓".green(),
                    view.entries().len()
                )),
            }
        }
    }
}
