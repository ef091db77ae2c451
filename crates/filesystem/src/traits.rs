//! Platform filesystem interface.

use std::path::PathBuf;

use crate::error::FileSystemError;
use crate::filesystem::BasicFilesystem;

/// Platform-specific primitives consumed by the generic filesystem layer.
///
/// Every `name` is relative to the filesystem root.
pub trait PlatformFilesystem: Send + Sync {
    /// Whether symbolic links can be read or created.
    fn symlinks_supported(&self) -> bool;

    /// Read the target of the symbolic link `name`.
    fn read_symlink(&self, name: &str) -> Result<PathBuf, FileSystemError>;

    /// Create a symbolic link `name` pointing at `target`.
    fn create_symlink(&self, target: &str, name: &str) -> Result<(), FileSystemError>;

    /// Mark `name` as hidden.
    fn hide(&self, name: &str) -> Result<(), FileSystemError>;

    /// Clear the hidden mark on `name`.
    fn unhide(&self, name: &str) -> Result<(), FileSystemError>;

    /// List the top-level mount points.
    fn roots(&self) -> Result<Vec<String>, FileSystemError>;

    /// Create directory `name` and all missing parents.
    fn mkdir_all(&self, name: &str, perm: u32) -> Result<(), FileSystemError>;
}

impl PlatformFilesystem for BasicFilesystem {
    fn symlinks_supported(&self) -> bool {
        BasicFilesystem::symlinks_supported(self)
    }

    fn read_symlink(&self, name: &str) -> Result<PathBuf, FileSystemError> {
        BasicFilesystem::read_symlink(self, name)
    }

    fn create_symlink(&self, target: &str, name: &str) -> Result<(), FileSystemError> {
        BasicFilesystem::create_symlink(self, target, name)
    }

    fn hide(&self, name: &str) -> Result<(), FileSystemError> {
        BasicFilesystem::hide(self, name)
    }

    fn unhide(&self, name: &str) -> Result<(), FileSystemError> {
        BasicFilesystem::unhide(self, name)
    }

    fn roots(&self) -> Result<Vec<String>, FileSystemError> {
        BasicFilesystem::roots(self)
    }

    fn mkdir_all(&self, name: &str, perm: u32) -> Result<(), FileSystemError> {
        BasicFilesystem::mkdir_all(self, name, perm)
    }
}
