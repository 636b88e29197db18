//! Path resolution for dawn configuration and data files.
//!
//! All dawn data is stored in `~/.dawn/` (or `$DAWN_HOME`):
//! - `config.yaml` - Main configuration file
//! - `dawn.db` - SQLite database holding the notes pad

use std::path::PathBuf;

use crate::error::DawnError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "DAWN_HOME";

/// Paths to dawn configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.dawn/`
    pub root: PathBuf,
    /// Config file: `~/.dawn/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.dawn/dawn.db`
    pub database: PathBuf,
}

impl Paths {
    /// Resolve paths from `$DAWN_HOME`, falling back to `~/.dawn/`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `DAWN_HOME` nor the home directory is set.
    pub fn new() -> Result<Self, DawnError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME")
            .map_err(|_| DawnError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".dawn")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("dawn.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), DawnError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                DawnError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
