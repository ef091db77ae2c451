//! Filesystem root (logical drive) enumeration.

use basicfs_common::DEFAULT_DRIVE_BUFFER_LEN;
use smallvec::{smallvec, SmallVec};

use crate::error::FileSystemError;
use crate::filesystem::BasicFilesystem;
use crate::wstr::split_multi_string;

impl BasicFilesystem {
    /// List the top-level mount points known to the OS, e.g. `C:\`.
    ///
    /// # Returns
    /// Drive roots in the order the OS reports them. An OS with no drives
    /// yields an empty list.
    ///
    /// # Errors
    /// - `FileSystemError::RootEnumeration` if the OS call fails
    pub fn roots(&self) -> Result<Vec<String>, FileSystemError> {
        let mut buffer: SmallVec<[u16; DEFAULT_DRIVE_BUFFER_LEN]> =
            smallvec![0; self.options().drive_buffer_len];

        let len: u32 = self
            .native()
            .logical_drive_strings(&mut buffer)
            .map_err(|source| FileSystemError::RootEnumeration { source })?;
        if len as usize > buffer.len() {
            tracing::debug!(
                "Drive list needs {} units, buffer holds {}; result is truncated",
                len,
                buffer.len()
            );
        }

        Ok(split_multi_string(&buffer))
    }
}
