//! Configuration options for the basic filesystem.

use std::path::PathBuf;

use basicfs_common::{DEFAULT_DRIVE_BUFFER_LEN, WINDOWS_TEMP_PREFIX};

/// Configuration for [`BasicFilesystem`](crate::BasicFilesystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicFilesystemOptions {
    /// Directory every adapter-relative name is resolved under.
    pub root: PathBuf,

    /// Prefix of in-progress temporary files, ignored by short-name detection.
    pub temp_prefix: String,

    /// Size, in UTF-16 units, of the drive enumeration buffer.
    pub drive_buffer_len: usize,
}

impl BasicFilesystemOptions {
    /// Create options for the given root with defaults for everything else.
    ///
    /// # Arguments
    /// * `root` - Root directory; made absolute when the filesystem is built
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            temp_prefix: WINDOWS_TEMP_PREFIX.to_string(),
            drive_buffer_len: DEFAULT_DRIVE_BUFFER_LEN,
        }
    }

    /// Use a different temporary file prefix.
    ///
    /// # Arguments
    /// * `prefix` - Prefix stripped from file names before short-name detection
    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    /// Use a different drive enumeration buffer size.
    ///
    /// # Arguments
    /// * `len` - Buffer size in UTF-16 units
    pub fn with_drive_buffer_len(mut self, len: usize) -> Self {
        self.drive_buffer_len = len;
        self
    }
}
