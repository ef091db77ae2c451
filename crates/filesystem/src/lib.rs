//! Windows platform primitives for a rooted host filesystem.
//!
//! A generic filesystem layer resolves every name under a fixed root and
//! relies on a handful of platform-specific operations. This crate provides
//! the Windows variants of those operations:
//!
//! - symbolic links, reported as unsupported
//! - file attributes (hidden, system, not-content-indexed)
//! - `mkdir -p` that copes with volume roots and concurrent creators
//! - logical drive enumeration
//! - expansion of legacy 8.3 short names
//!
//! # Platform Support
//!
//! The crate builds everywhere. Directory creation and short-name detection
//! work on every platform; attribute, drive and long-name queries go through
//! [`NativeFs`], whose system implementation reports
//! [`std::io::ErrorKind::Unsupported`] outside Windows.
//!
//! # Example
//!
//! ```no_run
//! use basicfs_filesystem::{BasicFilesystem, FileAttributes};
//!
//! let fs = BasicFilesystem::new("C:\\Sync")?;
//! fs.mkdir_all("photos/2024", 0o755)?;
//! fs.hide("photos")?;
//! fs.add_file_attributes("photos/2024", FileAttributes::NOT_CONTENT_INDEXED)?;
//! # Ok::<(), basicfs_filesystem::FileSystemError>(())
//! ```

mod attributes;
mod error;
mod filesystem;
mod mkdir;
pub mod native;
mod options;
mod roots;
mod short_name;
mod symlink;
mod traits;
pub mod wstr;

pub use attributes::FileAttributes;
pub use error::FileSystemError;
pub use filesystem::BasicFilesystem;
pub use mkdir::create_dir_all_robust;
pub use native::{NativeFs, SystemNativeFs};
pub use options::BasicFilesystemOptions;
pub use short_name::is_maybe_short_name;
pub use traits::PlatformFilesystem;

pub use basicfs_common::PathError;
