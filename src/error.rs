//! Error types for path algebra operations

use thiserror::Error;

/// The error type for path algebra operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A path that had to be absolute was relative
    #[error("Path is not absolute: {path}")]
    NotAbsolute { path: String },

    /// Two absolute paths are anchored differently (another drive, or
    /// drive-anchored against drive-relative) and have no relative expression
    #[error("No relative path from {start} to {path}: paths have different roots")]
    IncompatibleRoots { path: String, start: String },

    /// Unrecognized platform name
    #[error("Unknown platform: {name} (expected 'posix' or 'windows')")]
    UnknownPlatform { name: String },

    /// I/O error while reading the current working directory
    #[error("I/O error: {message}")]
    IoError { message: String },
}

impl PathError {
    /// Whether this error rejects the caller's input paths.
    ///
    /// Both [`PathError::NotAbsolute`] and [`PathError::IncompatibleRoots`]
    /// count as invalid input; a failure to read the working directory does not.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PathError::NotAbsolute { .. } | PathError::IncompatibleRoots { .. }
        )
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for path algebra operations
pub type Result<T> = std::result::Result<T, PathError>;
