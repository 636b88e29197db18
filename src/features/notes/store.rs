//! Backing stores for the notes pad.

use crate::config::Paths;
use crate::error::DawnError;
use crate::storage::Database;

/// Key the notes text is stored under.
pub const NOTES_KEY: &str = "dawn_notes";

/// A single opaque text blob that survives restarts.
#[cfg_attr(test, mockall::automock)]
pub trait NotesStore {
    /// Read the stored text, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self) -> Result<Option<String>, DawnError>;

    /// Replace the stored text.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn set(&self, text: &str) -> Result<(), DawnError>;
}

/// Notes kept in the dawn database.
///
/// A database that failed to open is remembered as missing; every access
/// then fails the same way a broken read or write would.
pub struct SqliteNotesStore {
    db: Option<Database>,
}

impl SqliteNotesStore {
    /// Create a store over an open database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// Open the database under `paths`.
    ///
    /// Never fails; an unopenable database is logged and leaves the store
    /// unavailable.
    #[must_use]
    pub fn open(paths: &Paths) -> Self {
        match Database::open(paths) {
            Ok(db) => Self::new(db),
            Err(e) => {
                log::warn!("notes unavailable: {e}");
                Self { db: None }
            }
        }
    }

    /// Whether the database opened.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.db.is_some()
    }

    fn db(&self) -> Result<&Database, DawnError> {
        self.db
            .as_ref()
            .ok_or_else(|| DawnError::Database("Notes database is unavailable".to_string()))
    }

    /// When the notes were last saved, as RFC 3339.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unavailable or cannot be read.
    pub fn updated_at(&self) -> Result<Option<String>, DawnError> {
        self.db()?.updated_at(NOTES_KEY)
    }
}

impl NotesStore for SqliteNotesStore {
    fn get(&self) -> Result<Option<String>, DawnError> {
        self.db()?.get_value(NOTES_KEY)
    }

    fn set(&self, text: &str) -> Result<(), DawnError> {
        self.db()?.set_value(NOTES_KEY, text)
    }
}
