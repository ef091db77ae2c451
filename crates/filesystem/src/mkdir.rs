//! Recursive directory creation.
//!
//! `std::fs::create_dir_all` trips over a few path shapes on Windows (volume
//! roots, trailing separators, `dir\.` suffixes), so directories are created
//! one level at a time here, re-checking after every failed create.

use std::fs;
use std::io;
use std::path::{is_separator, Path, PathBuf};

use crate::error::FileSystemError;
use crate::filesystem::BasicFilesystem;

impl BasicFilesystem {
    /// Create `name` and every missing parent directory.
    ///
    /// # Arguments
    /// * `name` - Adapter-relative directory name
    /// * `perm` - Permission bits for new directories, where the platform has them
    ///
    /// # Errors
    /// - `FileSystemError::Path` if the name escapes the root
    /// - `FileSystemError::NotADirectory` if `name` or a parent is a file
    /// - `FileSystemError::IoError` if a directory cannot be created
    pub fn mkdir_all(&self, name: &str, perm: u32) -> Result<(), FileSystemError> {
        let path: PathBuf = self.rooted(name)?;
        create_dir_all_robust(&path, perm)
    }
}

/// Create `path` and every missing parent, like `mkdir -p`.
///
/// Succeeds when `path` already is a directory, including when another
/// caller creates it concurrently.
///
/// # Arguments
/// * `path` - Absolute directory path
/// * `perm` - Permission bits for new directories, where the platform has them
///
/// # Errors
/// - `FileSystemError::NotADirectory` if `path` or a parent is not a directory
/// - `FileSystemError::IoError` with the original mkdir error otherwise
pub fn create_dir_all_robust(path: &Path, perm: u32) -> Result<(), FileSystemError> {
    // Fast path: nothing to do, or nothing we can do.
    if let Ok(metadata) = fs::metadata(path) {
        if metadata.is_dir() {
            return Ok(());
        }
        return Err(FileSystemError::NotADirectory {
            path: path.display().to_string(),
        });
    }

    if let Some(parent) = parent_of(path) {
        create_dir_all_robust(&parent, perm)?;
    }

    match mkdir(path, perm) {
        Ok(()) => Ok(()),
        Err(err) => {
            // Lost a race with another creator, or `path` ends in `.`.
            match fs::symlink_metadata(path) {
                Ok(metadata) if metadata.is_dir() => {
                    tracing::debug!(
                        "mkdir {} failed ({}), but directory exists",
                        path.display(),
                        err
                    );
                    Ok(())
                }
                _ => Err(FileSystemError::io_error(path.display().to_string(), err)),
            }
        }
    }
}

/// Parent portion of `path` that still needs creating, if any.
///
/// Trailing separators are skipped before the final element is scanned over.
/// Returns `None` when the parent is a single character (`/`, `\`, `a`) or
/// only a volume name such as `C:`.
fn parent_of(path: &Path) -> Option<PathBuf> {
    let bytes: &[u8] = path.as_os_str().as_encoded_bytes();

    let mut end: usize = bytes.len();
    while end > 0 && is_separator_byte(bytes[end - 1]) {
        end -= 1;
    }

    let mut start: usize = end;
    while start > 0 && !is_separator_byte(bytes[start - 1]) {
        start -= 1;
    }

    if start <= 1 {
        return None;
    }

    let parent: &[u8] = &bytes[..start - 1];
    if parent.len() == volume_name_len(parent) {
        return None;
    }

    Some(path_from_encoded(parent))
}

/// Rebuild a path from a prefix of its encoded bytes cut at a separator.
#[cfg(unix)]
fn path_from_encoded(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

/// Rebuild a path from a prefix of its encoded bytes cut at a separator.
///
/// Unpaired surrogates do not survive the trip.
#[cfg(not(unix))]
fn path_from_encoded(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

fn is_separator_byte(byte: u8) -> bool {
    byte.is_ascii() && is_separator(byte as char)
}

/// Length of the leading volume name: `C:` or `\\server\share`.
#[cfg(windows)]
fn volume_name_len(path: &[u8]) -> usize {
    if path.len() >= 2 && path[1] == b':' && path[0].is_ascii_alphabetic() {
        return 2;
    }

    let is_unc: bool = path.len() >= 5
        && is_separator_byte(path[0])
        && is_separator_byte(path[1])
        && !is_separator_byte(path[2]);
    if !is_unc {
        return 0;
    }

    // Skip `\\server\`, then the share name.
    let mut n: usize = 3;
    while n < path.len() && !is_separator_byte(path[n]) {
        n += 1;
    }
    n += 1;
    if n >= path.len() || is_separator_byte(path[n]) {
        return 0;
    }
    while n < path.len() && !is_separator_byte(path[n]) {
        n += 1;
    }
    n
}

#[cfg(not(windows))]
fn volume_name_len(_path: &[u8]) -> usize {
    0
}

fn mkdir(path: &Path, perm: u32) -> io::Result<()> {
    let mut builder: fs::DirBuilder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(perm);
    }
    #[cfg(not(unix))]
    let _ = perm;
    builder.create(path)
}
