//! Win32 implementation of the native surface.

use std::io;
use std::path::Path;

use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::{
    GetFileAttributesW, GetLogicalDriveStringsW, GetLongPathNameW, SetFileAttributesW,
    FILE_FLAGS_AND_ATTRIBUTES,
};

use super::{NativeFs, SystemNativeFs};
use crate::wstr::{path_to_wide, WidePath};

/// Returned by `GetFileAttributesW` on failure.
const INVALID_FILE_ATTRIBUTES: u32 = u32::MAX;

/// NUL-terminated wide form of `path`, the only input handed to Win32.
fn wide(path: &Path) -> io::Result<WidePath> {
    path_to_wide(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

impl NativeFs for SystemNativeFs {
    fn file_attributes(&self, path: &Path) -> io::Result<u32> {
        let path: WidePath = wide(path)?;
        let attrs: u32 = unsafe { GetFileAttributesW(PCWSTR::from_raw(path.as_ptr())) };
        if attrs == INVALID_FILE_ATTRIBUTES {
            return Err(io::Error::last_os_error());
        }
        Ok(attrs)
    }

    fn set_file_attributes(&self, path: &Path, attrs: u32) -> io::Result<()> {
        let path: WidePath = wide(path)?;
        unsafe {
            SetFileAttributesW(
                PCWSTR::from_raw(path.as_ptr()),
                FILE_FLAGS_AND_ATTRIBUTES(attrs),
            )
        }
        .map_err(|_| io::Error::last_os_error())
    }

    fn long_path_name(&self, short: &Path, buffer: &mut [u16]) -> io::Result<u32> {
        let short: WidePath = wide(short)?;
        let len: u32 = unsafe { GetLongPathNameW(PCWSTR::from_raw(short.as_ptr()), Some(buffer)) };
        if len == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(len)
    }

    fn logical_drive_strings(&self, buffer: &mut [u16]) -> io::Result<u32> {
        let len: u32 = unsafe { GetLogicalDriveStringsW(Some(buffer)) };
        if len == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(len)
    }
}
