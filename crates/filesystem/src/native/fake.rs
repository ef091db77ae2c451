//! In-memory [`NativeFs`] for unit tests.

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::NativeFs;
use crate::wstr::path_to_wide;

#[derive(Debug, Default)]
pub(crate) struct FakeNativeFs {
    attributes: Mutex<HashMap<String, u32>>,
    long_names: HashMap<String, String>,
    drives: Option<Vec<String>>,
    long_path_calls: AtomicUsize,
}

impl FakeNativeFs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: &Path, attrs: u32) -> Self {
        self.attributes.lock().insert(key(path), attrs);
        self
    }

    pub(crate) fn with_long_name(mut self, short: &Path, long: &Path) -> Self {
        self.long_names.insert(key(short), key(long));
        self
    }

    pub(crate) fn with_drives(mut self, drives: &[&str]) -> Self {
        self.drives = Some(drives.iter().map(|d: &&str| d.to_string()).collect());
        self
    }

    pub(crate) fn attrs_of(&self, path: &Path) -> Option<u32> {
        self.attributes.lock().get(&key(path)).copied()
    }

    pub(crate) fn long_path_calls(&self) -> usize {
        self.long_path_calls.load(Ordering::SeqCst)
    }
}

/// Same input validation as the real backend.
fn checked(path: &Path) -> io::Result<&Path> {
    path_to_wide(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    Ok(path)
}

fn key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn not_found() -> io::Error {
    io::Error::from(io::ErrorKind::NotFound)
}

/// Copy `value` plus terminator into `buffer` with Win32 length semantics.
fn fill(value: &str, buffer: &mut [u16]) -> u32 {
    let wide: Vec<u16> = value.encode_utf16().collect();
    if wide.len() >= buffer.len() {
        return (wide.len() + 1) as u32;
    }
    buffer[..wide.len()].copy_from_slice(&wide);
    buffer[wide.len()] = 0;
    wide.len() as u32
}

impl NativeFs for FakeNativeFs {
    fn file_attributes(&self, path: &Path) -> io::Result<u32> {
        self.attributes
            .lock()
            .get(&key(checked(path)?))
            .copied()
            .ok_or_else(not_found)
    }

    fn set_file_attributes(&self, path: &Path, attrs: u32) -> io::Result<()> {
        let mut attributes = self.attributes.lock();
        let entry: &mut u32 = attributes
            .get_mut(&key(checked(path)?))
            .ok_or_else(not_found)?;
        *entry = attrs;
        Ok(())
    }

    fn long_path_name(&self, short: &Path, buffer: &mut [u16]) -> io::Result<u32> {
        let short: &Path = checked(short)?;
        self.long_path_calls.fetch_add(1, Ordering::SeqCst);
        let long: &String = self
            .long_names
            .get(&key(short))
            .ok_or_else(not_found)?;
        Ok(fill(long, buffer))
    }

    fn logical_drive_strings(&self, buffer: &mut [u16]) -> io::Result<u32> {
        let drives: &Vec<String> = self
            .drives
            .as_ref()
            .ok_or_else(|| io::Error::from(io::ErrorKind::PermissionDenied))?;
        let mut joined: String = String::new();
        for drive in drives {
            joined.push_str(drive);
            joined.push('\0');
        }
        Ok(fill(&joined, buffer))
    }
}
