//! Legacy 8.3 short name resolution.
//!
//! Windows may hand out paths such as `C:\PROGRA~1\app` where one or more
//! segments are short aliases of a longer name. These are expanded with
//! `GetLongPathNameW`. A path that does not exist yet cannot be expanded, in
//! which case the closest ancestor that is already in long form is used.

use std::borrow::Cow;
use std::io;
use std::path::{is_separator, Path, PathBuf};

use basicfs_common::{is_within_root, SHORT_NAME_MARKER};
use smallvec::{smallvec, SmallVec};

use crate::error::FileSystemError;
use crate::filesystem::BasicFilesystem;
use crate::wstr::wide_to_path;

/// Long paths up to this many UTF-16 units are resolved without allocating.
const LONG_PATH_STACK_LEN: usize = 256;

/// Guess whether `path` may contain an 8.3 short name.
///
/// True when the path contains the `~` marker and either its directory part
/// does or its final segment does once `temp_prefix` is stripped. A real name
/// that happens to contain `~` also matches; that only costs an extra lookup.
///
/// With a trailing separator the directory part is the path without it, so
/// `C:\~tmp~x\` is judged on `C:\~tmp~x` as a whole.
///
/// # Arguments
/// * `path` - Absolute path to test
/// * `temp_prefix` - Temporary file prefix to ignore in the final segment
pub fn is_maybe_short_name(path: &Path, temp_prefix: &str) -> bool {
    let text: Cow<'_, str> = path.to_string_lossy();
    let text: &str = &text;
    if !text.contains(SHORT_NAME_MARKER) {
        return false;
    }

    let dir: &str = text.rfind(is_separator).map_or("", |i: usize| &text[..i]);
    if dir.contains(SHORT_NAME_MARKER) {
        return true;
    }

    let trimmed: &str = text.trim_end_matches(is_separator);
    let base: &str = trimmed
        .rfind(is_separator)
        .map_or(trimmed, |i: usize| &trimmed[i + 1..]);
    base.strip_prefix(temp_prefix)
        .unwrap_or(base)
        .contains(SHORT_NAME_MARKER)
}

impl BasicFilesystem {
    /// Expand 8.3 short names in an absolute path.
    ///
    /// Paths that do not look like they contain a short name are returned
    /// unchanged without asking the OS. When the OS cannot expand the path,
    /// the nearest ancestor under the root that is not itself a candidate is
    /// returned, or the root if there is none.
    ///
    /// # Arguments
    /// * `abs_path` - Absolute path under the root
    ///
    /// # Returns
    /// Long form of `abs_path`, or a long-form ancestor of it.
    pub fn resolve_short_name(&self, abs_path: &Path) -> PathBuf {
        let temp_prefix: &str = &self.options().temp_prefix;
        if !is_maybe_short_name(abs_path, temp_prefix) {
            return abs_path.to_path_buf();
        }

        tracing::trace!("Possible short name: {}", abs_path.display());
        match self.long_path_name(abs_path) {
            Ok(long) => long,
            Err(err) => {
                tracing::debug!(
                    "Cannot expand {} ({}), using nearest long-form ancestor",
                    abs_path.display(),
                    err
                );
                self.nearest_long_ancestor(abs_path)
            }
        }
    }

    /// Ask the OS for the long form of `abs_path`.
    ///
    /// The first attempt uses a buffer of four times the input length; if the
    /// OS reports a larger size the buffer is grown to exactly that size and
    /// the call is retried once.
    fn long_path_name(&self, abs_path: &Path) -> Result<PathBuf, FileSystemError> {
        let io_error = |e: io::Error| FileSystemError::io_error(abs_path.display().to_string(), e);

        let mut buffer: SmallVec<[u16; LONG_PATH_STACK_LEN]> =
            smallvec![0; 4 * abs_path.as_os_str().len()];
        let len: usize = self
            .native()
            .long_path_name(abs_path, &mut buffer)
            .map_err(io_error)? as usize;
        if len < buffer.len() {
            return Ok(wide_to_path(&buffer[..len]));
        }

        tracing::trace!("Long path needs {} units, retrying", len);
        buffer = smallvec![0; len];
        let len: usize = self
            .native()
            .long_path_name(abs_path, &mut buffer)
            .map_err(io_error)? as usize;
        if len < buffer.len() {
            return Ok(wide_to_path(&buffer[..len]));
        }

        Err(io_error(io::Error::new(
            io::ErrorKind::Other,
            "long path name changed size between calls",
        )))
    }

    /// Closest ancestor of `abs_path` under the root that is not a candidate.
    fn nearest_long_ancestor(&self, abs_path: &Path) -> PathBuf {
        let temp_prefix: &str = &self.options().temp_prefix;
        let mut current: Option<&Path> = abs_path.parent();
        while let Some(dir) = current {
            if !is_within_root(dir, self.root()) {
                break;
            }
            if !is_maybe_short_name(dir, temp_prefix) {
                return dir.to_path_buf();
            }
            current = dir.parent();
        }
        self.root().to_path_buf()
    }
}
