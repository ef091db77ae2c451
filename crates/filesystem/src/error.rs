//! File system error types.

use basicfs_common::PathError;
use thiserror::Error;

/// Errors that can occur during platform filesystem operations.
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// Name could not be mapped under the root (from common crate).
    #[error(transparent)]
    Path(#[from] PathError),

    /// Symbolic links are not available on this platform.
    #[error("symlinks not supported")]
    SymlinksNotSupported,

    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The path that exists as a non-directory.
        path: String,
    },

    /// Path cannot be passed to the native API.
    #[error("Invalid path: {path}")]
    InvalidPath {
        /// The invalid path.
        path: String,
    },

    /// IO error.
    #[error("IO error at {path}: {source}")]
    IoError {
        /// Path where error occurred.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Logical drive enumeration failed.
    #[error("Failed to enumerate filesystem roots: {source}")]
    RootEnumeration {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl FileSystemError {
    /// Create an IoError from std::io::Error.
    ///
    /// # Arguments
    /// * `path` - Path where the error occurred
    /// * `source` - The underlying IO error
    pub fn io_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// The underlying OS error, if this error came from an OS call.
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            Self::IoError { source, .. } | Self::RootEnumeration { source } => Some(source),
            _ => None,
        }
    }
}
