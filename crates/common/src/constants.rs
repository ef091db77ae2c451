//! Constants shared across crates.

/// Prefix used for temporary files while they are being written.
///
/// The prefix itself contains the short-name marker, so it is stripped before
/// a file name is tested for 8.3 aliasing.
pub const WINDOWS_TEMP_PREFIX: &str = "~syncthing~";

/// Character that appears in every legacy 8.3 short name (`PROGRA~1`).
pub const SHORT_NAME_MARKER: char = '~';

/// Default size, in UTF-16 units, of the buffer handed to the drive enumeration API.
pub const DEFAULT_DRIVE_BUFFER_LEN: usize = 1024;

/// Default permission bits for directories created by `mkdir_all`.
pub const DEFAULT_DIR_PERM: u32 = 0o777;
