//! The notes pad: an append-only log of free-text entries.
//!
//! Entries are joined with [`ENTRY_DELIMITER`] into a single stored blob.
//! A failed read never overwrites what is already stored.

use serde::Serialize;

use super::store::NotesStore;
use crate::error::DawnError;

/// Separator placed between entries.
pub const ENTRY_DELIMITER: &str = "\n\n---\n\n";

/// Shown when nothing has been saved yet.
pub const EMPTY_PLACEHOLDER: &str =
    "No notes yet. Write something for each other above and click Save.";

/// Shown when the store cannot be read.
pub const LOAD_FAILED_MESSAGE: &str = "Couldn't load notes.";

/// Shown when a save fails.
pub const SAVE_FAILED_MESSAGE: &str = "Couldn't save. Try again.";

/// What the notes section should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "lowercase")]
pub enum NotesView {
    /// Stored notes.
    Saved(String),
    /// Nothing stored yet.
    Empty,
    /// The store could not be read.
    Unavailable,
}

impl NotesView {
    /// Text to display.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Saved(text) => text,
            Self::Empty => EMPTY_PLACEHOLDER,
            Self::Unavailable => LOAD_FAILED_MESSAGE,
        }
    }

    /// Individual entries, oldest first. Empty unless notes are saved.
    #[must_use]
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Self::Saved(text) => text.split(ENTRY_DELIMITER).collect(),
            Self::Empty | Self::Unavailable => Vec::new(),
        }
    }
}

/// Result of an append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Input was blank; nothing was written.
    Ignored,
    /// The new full notes text.
    Saved(String),
}

/// Reads and appends notes through a [`NotesStore`].
pub struct NotesPad<S: NotesStore> {
    store: S,
}

impl<S: NotesStore> NotesPad<S> {
    /// Create a pad over `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the notes for display.
    ///
    /// Read failures degrade to [`NotesView::Unavailable`].
    pub fn load(&self) -> NotesView {
        match self.store.get() {
            Ok(Some(text)) if !text.is_empty() => NotesView::Saved(text),
            Ok(_) => NotesView::Empty,
            Err(e) => {
                log::warn!("could not load notes: {e}");
                NotesView::Unavailable
            }
        }
    }

    /// Append a new entry.
    ///
    /// Surrounding whitespace is trimmed; blank input is ignored.
    ///
    /// # Errors
    ///
    /// Returns the store's error if existing notes cannot be read or the new
    /// text cannot be written. Stored content is left unchanged either way.
    pub fn append(&self, text: &str) -> Result<SaveOutcome, DawnError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(SaveOutcome::Ignored);
        }

        let existing = self.store.get().inspect_err(|e| {
            log::warn!("could not read notes before saving: {e}");
        })?;

        let updated = match existing.as_deref() {
            Some(existing) if !existing.is_empty() => {
                format!("{existing}{ENTRY_DELIMITER}{text}")
            }
            _ => text.to_string(),
        };

        self.store.set(&updated).inspect_err(|e| {
            log::warn!("could not save notes: {e}");
        })?;

        log::debug!("saved notes ({} bytes)", updated.len());
        Ok(SaveOutcome::Saved(updated))
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}
