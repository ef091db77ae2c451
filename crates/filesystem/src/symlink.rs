//! Symbolic link capability.
//!
//! Creating links on Windows needs elevated privileges or developer mode and
//! support differs between filesystem drivers, so links are reported as
//! unsupported outright. Callers check [`BasicFilesystem::symlinks_supported`]
//! before attempting link operations.

use std::path::PathBuf;

use crate::error::FileSystemError;
use crate::filesystem::BasicFilesystem;

impl BasicFilesystem {
    /// Whether symbolic links can be read or created. Always false.
    pub fn symlinks_supported(&self) -> bool {
        false
    }

    /// Read the target of a symbolic link.
    ///
    /// # Errors
    /// Always `FileSystemError::SymlinksNotSupported`, whether or not `name` exists.
    pub fn read_symlink(&self, _name: &str) -> Result<PathBuf, FileSystemError> {
        Err(FileSystemError::SymlinksNotSupported)
    }

    /// Create a symbolic link `name` pointing at `target`.
    ///
    /// # Errors
    /// Always `FileSystemError::SymlinksNotSupported`; nothing is created.
    pub fn create_symlink(&self, _target: &str, _name: &str) -> Result<(), FileSystemError> {
        Err(FileSystemError::SymlinksNotSupported)
    }
}
