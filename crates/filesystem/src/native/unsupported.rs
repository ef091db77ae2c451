//! Fallback for targets without the Win32 calls.

use std::io;
use std::path::Path;

use super::{NativeFs, SystemNativeFs};

fn unsupported(call: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{} is only available on Windows", call),
    )
}

impl NativeFs for SystemNativeFs {
    fn file_attributes(&self, _path: &Path) -> io::Result<u32> {
        Err(unsupported("GetFileAttributesW"))
    }

    fn set_file_attributes(&self, _path: &Path, _attrs: u32) -> io::Result<()> {
        Err(unsupported("SetFileAttributesW"))
    }

    fn long_path_name(&self, _short: &Path, _buffer: &mut [u16]) -> io::Result<u32> {
        Err(unsupported("GetLongPathNameW"))
    }

    fn logical_drive_strings(&self, _buffer: &mut [u16]) -> io::Result<u32> {
        Err(unsupported("GetLogicalDriveStringsW"))
    }
}
