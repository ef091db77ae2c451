//! Wide string conversion utilities.

use std::path::{Path, PathBuf};

use smallvec::SmallVec;

use crate::error::FileSystemError;

/// Paths up to `MAX_PATH` units are converted without allocating.
const WIDE_PATH_STACK_LEN: usize = 260;

/// NUL-terminated UTF-16 path as handed to the native API.
pub type WidePath = SmallVec<[u16; WIDE_PATH_STACK_LEN]>;

/// Convert a path to a NUL-terminated wide string for the native API.
///
/// # Arguments
/// * `path` - Path to convert
///
/// # Returns
/// Null-terminated UTF-16 string.
///
/// # Errors
/// - `FileSystemError::InvalidPath` if the path contains a NUL or is not
///   representable as UTF-16
pub fn path_to_wide(path: &Path) -> Result<WidePath, FileSystemError> {
    let mut wide: WidePath = encode_wide(path).ok_or_else(|| FileSystemError::InvalidPath {
        path: path.display().to_string(),
    })?;
    if wide.contains(&0) {
        return Err(FileSystemError::InvalidPath {
            path: path.display().to_string(),
        });
    }
    wide.push(0); // Null terminator
    Ok(wide)
}

/// Convert a wide string back into a path, stopping at the first NUL.
///
/// # Arguments
/// * `wide` - Wide string slice, optionally NUL-terminated
pub fn wide_to_path(wide: &[u16]) -> PathBuf {
    decode_wide(trim_nul(wide))
}

/// Convert wide string slice to Rust String, stopping at the first NUL.
///
/// Unpaired surrogates are replaced rather than rejected.
pub fn wide_to_string(wide: &[u16]) -> String {
    String::from_utf16_lossy(trim_nul(wide))
}

/// Split a double-NUL terminated multi-string buffer into its entries.
///
/// Parsing stops at the first empty entry, so trailing zero padding and
/// anything after the terminator are ignored.
///
/// # Arguments
/// * `buffer` - Buffer as filled in by the native API
///
/// # Returns
/// Entries in buffer order.
pub fn split_multi_string(buffer: &[u16]) -> Vec<String> {
    buffer
        .split(|&unit| unit == 0)
        .take_while(|entry| !entry.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}

fn trim_nul(wide: &[u16]) -> &[u16] {
    match wide.iter().position(|&unit| unit == 0) {
        Some(end) => &wide[..end],
        None => wide,
    }
}

#[cfg(windows)]
fn encode_wide(path: &Path) -> Option<WidePath> {
    use std::os::windows::ffi::OsStrExt;

    Some(path.as_os_str().encode_wide().collect())
}

#[cfg(not(windows))]
fn encode_wide(path: &Path) -> Option<WidePath> {
    path.to_str().map(|s: &str| s.encode_utf16().collect())
}

#[cfg(windows)]
fn decode_wide(wide: &[u16]) -> PathBuf {
    use std::os::windows::ffi::OsStringExt;

    PathBuf::from(std::ffi::OsString::from_wide(wide))
}

#[cfg(not(windows))]
fn decode_wide(wide: &[u16]) -> PathBuf {
    PathBuf::from(String::from_utf16_lossy(wide))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_path_to_wide() {
        let result: WidePath = path_to_wide(Path::new("Hello")).unwrap();
        assert_eq!(&result[..], &[0x0048, 0x0065, 0x006C, 0x006C, 0x006F, 0x0000]);
        assert!(!result.spilled());
    }

    #[test]
    fn test_path_to_wide_unicode() {
        let result: WidePath = path_to_wide(Path::new("Hello 世界")).unwrap();
        // Should end with null terminator
        assert_eq!(result.last(), Some(&0));
        assert_eq!(wide_to_path(&result), PathBuf::from("Hello 世界"));
    }

    #[test]
    fn test_path_to_wide_rejects_interior_nul() {
        let result = path_to_wide(Path::new("bad\0name"));
        assert!(matches!(result, Err(FileSystemError::InvalidPath { .. })));
    }

    #[test]
    fn test_path_to_wide_always_single_terminator() {
        let long: String = "segment/".repeat(64);
        for path in ["", "a", "C:\\dir\\file.txt", long.as_str()] {
            let result: WidePath = path_to_wide(Path::new(path)).unwrap();
            assert_eq!(result.last(), Some(&0));
            assert_eq!(result.iter().filter(|&&unit| unit == 0).count(), 1);
            assert_eq!(result.len(), path.encode_utf16().count() + 1);
        }
    }

    #[test]
    fn test_wide_to_string_stops_at_nul() {
        let mut buffer: Vec<u16> = wide("C:\\Program Files");
        buffer.extend([0, 0x41, 0x42]);
        assert_eq!(wide_to_string(&buffer), "C:\\Program Files");
        assert_eq!(wide_to_string(&[]), "");
    }

    #[test]
    fn test_split_multi_string() {
        let mut buffer: Vec<u16> = wide("A:\\\0C:\\\0D:\\\0\0");
        buffer.resize(64, 0);
        assert_eq!(split_multi_string(&buffer), vec!["A:\\", "C:\\", "D:\\"]);
    }

    #[test]
    fn test_split_multi_string_ignores_data_after_terminator() {
        let buffer: Vec<u16> = wide("C:\\\0\0Z:\\\0");
        assert_eq!(split_multi_string(&buffer), vec!["C:\\"]);
    }

    #[test]
    fn test_split_multi_string_empty() {
        assert!(split_multi_string(&[0; 16]).is_empty());
        assert!(split_multi_string(&[]).is_empty());
    }
}
