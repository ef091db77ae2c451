//! Native OS surface used by the platform primitives.
//!
//! The adapter talks to the operating system through [`NativeFs`], which
//! mirrors the Win32 calls it needs. [`SystemNativeFs`] is the real backend;
//! on targets without those calls every method reports
//! [`std::io::ErrorKind::Unsupported`].

use std::fmt;
use std::io;
use std::path::Path;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod win32;

/// File attribute, long path and drive queries.
///
/// Paths are converted to the OS encoding by the backend. A path that has
/// no such encoding, or contains a NUL, fails with
/// [`io::ErrorKind::InvalidInput`] before reaching the OS.
pub trait NativeFs: Send + Sync + fmt::Debug {
    /// Read the raw attribute mask of a file or directory.
    fn file_attributes(&self, path: &Path) -> io::Result<u32>;

    /// Overwrite the raw attribute mask of a file or directory.
    fn set_file_attributes(&self, path: &Path, attrs: u32) -> io::Result<()>;

    /// Expand 8.3 short names in `short` into `buffer` as UTF-16.
    ///
    /// Returns the number of units written, excluding the terminator, when
    /// the result fits. When it does not fit, returns the required buffer
    /// size including the terminator and leaves `buffer` unspecified.
    fn long_path_name(&self, short: &Path, buffer: &mut [u16]) -> io::Result<u32>;

    /// Fill `buffer` with the double-NUL terminated list of logical drives.
    ///
    /// Returns the number of units written, excluding the final terminator,
    /// or the required size when `buffer` is too small.
    fn logical_drive_strings(&self, buffer: &mut [u16]) -> io::Result<u32>;
}

/// The operating system's own implementation of [`NativeFs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNativeFs;
