//! Error types for dawn.

use thiserror::Error;

/// Errors that can occur while running dawn.
#[derive(Error, Debug)]
pub enum DawnError {
    /// Configuration could not be resolved, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The local database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// A command-line value was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The terminal could not be driven.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DawnError::Config("bad value".to_string()).to_string(),
            "Configuration error: bad value"
        );
        assert_eq!(
            DawnError::InvalidArgument("0m".to_string()).to_string(),
            "Invalid argument: 0m"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: DawnError = io.into();
        assert!(matches!(err, DawnError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
