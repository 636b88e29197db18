//! Persisted notes pad.
//!
//! Free-text entries appended to a single stored blob, kept in the local
//! database across restarts.

pub mod pad;
pub mod store;

pub use pad::{
    NotesPad, NotesView, SaveOutcome, EMPTY_PLACEHOLDER, ENTRY_DELIMITER, LOAD_FAILED_MESSAGE,
    SAVE_FAILED_MESSAGE,
};
pub use store::{NotesStore, SqliteNotesStore, NOTES_KEY};
