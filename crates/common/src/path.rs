//! Mapping between adapter-relative names and absolute rooted paths.

use std::path::{is_separator, Component, Path, PathBuf};

use crate::error::PathError;

/// Join an adapter-relative name under `root`.
///
/// The name is cleaned lexically first. A leading single separator is
/// accepted and treated as relative to the root, so `"/a"` and `"a"` name the
/// same entry. Names that start with two separators, carry a drive or UNC
/// prefix in any segment, or use `..` to climb above the root are rejected.
///
/// # Arguments
/// * `root` - Absolute root directory
/// * `rel` - Name relative to the root
///
/// # Returns
/// Absolute path under `root`. `""`, `"."` and `"/"` map to the root itself.
///
/// # Errors
/// - `PathError::EmptyRoot` if `root` is empty
/// - `PathError::NotRelative` if `rel` would escape the root
pub fn rooted(root: &Path, rel: &str) -> Result<PathBuf, PathError> {
    if root.as_os_str().is_empty() {
        return Err(PathError::EmptyRoot);
    }

    let cleaned: PathBuf = clean_relative(rel)?;
    if cleaned.as_os_str().is_empty() {
        return Ok(root.to_path_buf());
    }
    Ok(root.join(cleaned))
}

/// Strip `root` from an absolute path.
///
/// # Arguments
/// * `root` - Absolute root directory
/// * `path` - Absolute path under the root
///
/// # Returns
/// The remainder relative to `root`, empty for the root itself.
///
/// # Errors
/// - `PathError::OutsideRoot` if `path` does not live under `root`
pub fn unrooted(root: &Path, path: &Path) -> Result<PathBuf, PathError> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| PathError::OutsideRoot {
            path: path.display().to_string(),
            root: root.display().to_string(),
        })
}

/// Check whether `path` is `root` or a descendant of it.
///
/// The comparison is component-wise, so `/data2` is not within `/data`.
pub fn is_within_root(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

/// Make a path absolute by joining it onto the current directory.
///
/// Absolute paths are returned unchanged. No symlinks are resolved and the
/// path does not need to exist.
///
/// # Errors
/// - `PathError::CurrentDir` if the working directory cannot be read
pub fn to_absolute(path: &Path) -> Result<PathBuf, PathError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd: PathBuf =
        std::env::current_dir().map_err(|source| PathError::CurrentDir { source })?;
    Ok(cwd.join(path))
}

/// Lexically clean a relative name, refusing anything that leaves the root.
fn clean_relative(rel: &str) -> Result<PathBuf, PathError> {
    let not_relative = || PathError::NotRelative {
        path: rel.to_string(),
    };

    let mut chars = rel.chars();
    if let (Some(first), Some(second)) = (chars.next(), chars.next()) {
        if is_separator(first) && is_separator(second) {
            return Err(not_relative());
        }
    }

    let mut parts: Vec<&str> = Vec::new();
    for segment in rel.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() {
                    return Err(not_relative());
                }
            }
            // A drive prefix anywhere replaces everything joined before it.
            name if has_prefix(name) => return Err(not_relative()),
            name => parts.push(name),
        }
    }

    Ok(parts.into_iter().collect())
}

fn has_prefix(segment: &str) -> bool {
    matches!(
        Path::new(segment).components().next(),
        Some(Component::Prefix(_))
    )
}
