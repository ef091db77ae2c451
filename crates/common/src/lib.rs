//! Shared path helpers and constants for the basic filesystem crates.
//!
//! Every platform primitive operates on absolute paths that live under a
//! configured root. The helpers here turn adapter-relative names into such
//! paths (and back) without ever touching the filesystem.

mod constants;
mod error;
mod path;

pub use constants::*;
pub use error::PathError;
pub use path::{is_within_root, rooted, to_absolute, unrooted};
