//! Error types and handling infrastructure for filerev.
//!
//! Library operations return [`FilerevError`] through the [`Result`] alias; the
//! binary wraps them in `anyhow` at the top level.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should name the file involved
//! - **No silent failures**: A failed read is a value the caller must observe
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for filerev operations.
#[derive(Error, Debug)]
pub enum FilerevError {
    /// File system related errors (open failure, permission denied, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Extension is neither `.txt` nor `.csv`
    #[error("Unsupported file format (expected .txt or .csv): {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Settings file could not be read or parsed
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// Standard Result type for filerev operations.
pub type Result<T> = std::result::Result<T, FilerevError>;

impl FilerevError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create an UnsupportedFormat error for the given path
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for FilerevError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            // The path is not known here; call sites that have it use FileNotFound
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_messages() {
        let path = PathBuf::from("/test/data.txt");

        let file_not_found = FilerevError::FileNotFound { path: path.clone() };
        assert_eq!(file_not_found.to_string(), "File not found: /test/data.txt");

        let not_a_file = FilerevError::NotAFile { path: path.clone() };
        assert_eq!(
            not_a_file.to_string(),
            "Path is not a regular file: /test/data.txt"
        );

        let unsupported = FilerevError::unsupported_format("/test/data.json");
        assert_eq!(
            unsupported.to_string(),
            "Unsupported file format (expected .txt or .csv): /test/data.json"
        );
    }

    #[test]
    fn test_error_constructors() {
        let arg_err = FilerevError::invalid_argument("too many files");
        assert!(matches!(arg_err, FilerevError::InvalidArgument { .. }));
        assert_eq!(arg_err.to_string(), "Invalid argument: too many files");

        let config_err = FilerevError::config("bad toml");
        assert!(matches!(config_err, FilerevError::ConfigError { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: FilerevError = io_err.into();

        match err {
            FilerevError::FileError { message, .. } => {
                assert_eq!(message, "File not found");
            }
            _ => panic!("Expected FileError variant"),
        }

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        match FilerevError::from(io_err) {
            FilerevError::FileError { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected FileError variant"),
        }
    }
}
