//! Path error types.

use thiserror::Error;

/// Errors produced while mapping names onto the filesystem root.
#[derive(Debug, Error)]
pub enum PathError {
    /// The configured root is empty.
    #[error("Root directory is empty")]
    EmptyRoot,

    /// The name is absolute or tries to climb out of the root.
    #[error("Not a relative path: {path}")]
    NotRelative {
        /// The offending name.
        path: String,
    },

    /// An absolute path does not live under the root.
    #[error("Path is outside root: {path} not in {root}")]
    OutsideRoot {
        /// The path that was checked.
        path: String,
        /// The root directory it should be within.
        root: String,
    },

    /// The current working directory could not be determined.
    #[error("Cannot determine current directory: {source}")]
    CurrentDir {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
