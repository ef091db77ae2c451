//! The rooted filesystem handle shared by all platform primitives.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use basicfs_common::to_absolute;

use crate::error::FileSystemError;
use crate::native::{NativeFs, SystemNativeFs};
use crate::options::BasicFilesystemOptions;

/// Host filesystem rooted at a fixed directory.
///
/// Holds only immutable configuration and the native backend, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct BasicFilesystem {
    /// Absolute root directory.
    root: PathBuf,
    /// Configuration options.
    options: BasicFilesystemOptions,
    /// OS calls for attributes, long names and drives.
    native: Arc<dyn NativeFs>,
}

impl BasicFilesystem {
    /// Create a filesystem rooted at `root` using the system backend.
    ///
    /// # Arguments
    /// * `root` - Root directory; relative roots are joined onto the current directory
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, FileSystemError> {
        Self::with_options(BasicFilesystemOptions::new(root))
    }

    /// Create a filesystem from options using the system backend.
    pub fn with_options(options: BasicFilesystemOptions) -> Result<Self, FileSystemError> {
        Self::with_native(options, Arc::new(SystemNativeFs))
    }

    /// Create a filesystem from options with a custom native backend.
    ///
    /// # Arguments
    /// * `options` - Configuration options
    /// * `native` - Backend used for attribute, long path and drive queries
    ///
    /// # Errors
    /// - `FileSystemError::Path` if the root cannot be made absolute
    pub fn with_native(
        options: BasicFilesystemOptions,
        native: Arc<dyn NativeFs>,
    ) -> Result<Self, FileSystemError> {
        let root: PathBuf = to_absolute(&options.root)?;
        Ok(Self {
            root,
            options,
            native,
        })
    }

    /// Absolute root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configuration options.
    pub fn options(&self) -> &BasicFilesystemOptions {
        &self.options
    }

    pub(crate) fn native(&self) -> &dyn NativeFs {
        self.native.as_ref()
    }

    /// Resolve an adapter-relative name to an absolute path under the root.
    ///
    /// # Errors
    /// - `FileSystemError::Path` if the name escapes the root
    pub fn rooted(&self, name: &str) -> Result<PathBuf, FileSystemError> {
        Ok(basicfs_common::rooted(&self.root, name)?)
    }

    /// Turn an absolute path under the root back into an adapter-relative one.
    ///
    /// # Errors
    /// - `FileSystemError::Path` if the path is outside the root
    pub fn unrooted(&self, path: &Path) -> Result<PathBuf, FileSystemError> {
        Ok(basicfs_common::unrooted(&self.root, path)?)
    }
}
