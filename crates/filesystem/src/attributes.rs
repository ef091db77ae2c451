//! File attribute management.

use std::path::{Path, PathBuf};

use bitflags::bitflags;

use crate::error::FileSystemError;
use crate::filesystem::BasicFilesystem;

bitflags! {
    /// Windows file attribute mask.
    ///
    /// Bits without a named constant are kept as-is, so a mask read from the
    /// OS survives a round trip through this type unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FileAttributes: u32 {
        const READONLY = 0x0000_0001;
        const HIDDEN = 0x0000_0002;
        const SYSTEM = 0x0000_0004;
        const DIRECTORY = 0x0000_0010;
        const ARCHIVE = 0x0000_0020;
        const NORMAL = 0x0000_0080;
        const TEMPORARY = 0x0000_0100;
        const REPARSE_POINT = 0x0000_0400;
        const COMPRESSED = 0x0000_0800;
        const OFFLINE = 0x0000_1000;
        const NOT_CONTENT_INDEXED = 0x0000_2000;
        const ENCRYPTED = 0x0000_4000;

        const _ = !0;
    }
}

impl FileAttributes {
    /// The only bits [`BasicFilesystem::add_file_attributes`] will set.
    pub const ADDABLE: Self = Self::HIDDEN
        .union(Self::SYSTEM)
        .union(Self::NOT_CONTENT_INDEXED);
}

impl BasicFilesystem {
    /// Read the attribute mask of `name`.
    ///
    /// # Arguments
    /// * `name` - Adapter-relative name
    ///
    /// # Errors
    /// - `FileSystemError::Path` if the name escapes the root
    /// - `FileSystemError::IoError` if the OS query fails
    pub fn get_file_attributes(&self, name: &str) -> Result<FileAttributes, FileSystemError> {
        let path: PathBuf = self.rooted(name)?;
        self.read_attributes(&path)
    }

    /// Overwrite the attribute mask of `name` verbatim.
    ///
    /// Typically `attrs` comes from [`get_file_attributes`](Self::get_file_attributes)
    /// with some bits changed; nothing here preserves bits the caller dropped.
    ///
    /// # Arguments
    /// * `name` - Adapter-relative name
    /// * `attrs` - Complete new mask
    pub fn set_file_attributes(
        &self,
        name: &str,
        attrs: FileAttributes,
    ) -> Result<(), FileSystemError> {
        let path: PathBuf = self.rooted(name)?;
        self.write_attributes(&path, attrs)
    }

    /// Add attributes to `name`, keeping every bit already set.
    ///
    /// Only hidden, system and not-content-indexed can be added; other bits
    /// in `attrs` are ignored.
    ///
    /// # Arguments
    /// * `name` - Adapter-relative name
    /// * `attrs` - Bits to add
    pub fn add_file_attributes(
        &self,
        name: &str,
        attrs: FileAttributes,
    ) -> Result<(), FileSystemError> {
        let path: PathBuf = self.rooted(name)?;
        let current: FileAttributes = self.read_attributes(&path)?;
        let added: FileAttributes = attrs.intersection(FileAttributes::ADDABLE);
        self.write_attributes(&path, current.union(added))
    }

    /// Set the hidden attribute on `name`.
    pub fn hide(&self, name: &str) -> Result<(), FileSystemError> {
        let path: PathBuf = self.rooted(name)?;
        let current: FileAttributes = self.read_attributes(&path)?;
        self.write_attributes(&path, current.union(FileAttributes::HIDDEN))
    }

    /// Clear the hidden attribute on `name`.
    pub fn unhide(&self, name: &str) -> Result<(), FileSystemError> {
        let path: PathBuf = self.rooted(name)?;
        let current: FileAttributes = self.read_attributes(&path)?;
        self.write_attributes(&path, current.difference(FileAttributes::HIDDEN))
    }

    fn read_attributes(&self, path: &Path) -> Result<FileAttributes, FileSystemError> {
        let bits: u32 = self
            .native()
            .file_attributes(path)
            .map_err(|e| FileSystemError::io_error(path.display().to_string(), e))?;
        Ok(FileAttributes::from_bits_retain(bits))
    }

    fn write_attributes(&self, path: &Path, attrs: FileAttributes) -> Result<(), FileSystemError> {
        tracing::trace!("Setting attributes {:?} on {}", attrs, path.display());
        self.native()
            .set_file_attributes(path, attrs.bits())
            .map_err(|e| FileSystemError::io_error(path.display().to_string(), e))
    }
}
