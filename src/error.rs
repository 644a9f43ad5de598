//! Error types for textevent library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for textevent operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during annotation.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested pipeline is unknown or could not be initialized.
    #[error("Failed to load pipeline '{name}': {reason}")]
    ModelLoad { name: String, reason: String },

    /// The input file is missing, unreadable, or not valid UTF-8.
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The pipeline failed on the given text or returned inconsistent output.
    #[error("Processing error: {0}")]
    Processing(String),

    /// The output could not be serialized or written.
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error during standalone rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a [`Error::ModelLoad`] for an identifier.
    pub fn model_load(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ModelLoad {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`Error::FileRead`] for a path.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Build a [`Error::FileWrite`] for a path.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::model_load("xx_missing", "not registered");
        assert_eq!(
            err.to_string(),
            "Failed to load pipeline 'xx_missing': not registered"
        );

        let err = Error::Processing("head out of range".into());
        assert_eq!(err.to_string(), "Processing error: head out of range");
    }

    #[test]
    fn test_file_errors_carry_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::file_read("missing.txt", io_err);
        assert!(matches!(err, Error::FileRead { .. }));
        assert!(err.to_string().contains("missing.txt"));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Error::file_write("/out.json", io_err);
        assert!(err.to_string().starts_with("Failed to write /out.json"));
    }

    #[test]
    fn test_error_source_is_io() {
        use std::error::Error as _;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::file_read("a.txt", io_err);
        assert!(err.source().is_some());
    }
}
