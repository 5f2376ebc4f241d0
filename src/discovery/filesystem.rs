//! Filesystem access used by the walker
//!
//! The walker only needs two primitives: listing a directory and reading the
//! metadata of a single entry. Keeping them behind [`FileSystem`] lets tests
//! drive the walk over trees that would be awkward to build on disk, such as
//! directories that cannot be read.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::utils::base_name;

/// Kind of a filesystem entry, as seen without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file
    File,
    /// A directory
    Directory,
    /// A symbolic link (never followed)
    Symlink,
    /// Sockets, fifos, devices
    Other,
}

/// Metadata handed to predicates for every regular file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    name: String,
    len: u64,
    kind: EntryKind,
}

impl EntryInfo {
    /// Creates entry information from its parts
    pub fn new(name: impl Into<String>, len: u64, kind: EntryKind) -> Self {
        EntryInfo {
            name: name.into(),
            len,
            kind,
        }
    }

    /// Builds entry information from `symlink_metadata` of `path`
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        EntryInfo::new(base_name(path), metadata.len(), kind)
    }

    /// Base name of the entry
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the entry holds zero bytes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Directory listing and metadata primitives consumed by the walker
pub trait FileSystem {
    /// Lists the children of `dir` as full paths, in any order
    ///
    /// # Errors
    /// Returns an error if `dir` does not exist or cannot be read
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Reads the metadata of `path` without following a final symlink
    ///
    /// # Errors
    /// Returns an error if the entry vanished or cannot be inspected
    fn stat(&self, path: &Path) -> io::Result<EntryInfo>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir)?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    debug!("Skipping unreadable entry in {}: {e}", dir.display());
                    None
                }
            })
            .collect();

        Ok(entries)
    }

    fn stat(&self, path: &Path) -> io::Result<EntryInfo> {
        let metadata = fs::symlink_metadata(path)?;
        Ok(EntryInfo::from_metadata(path, &metadata))
    }
}
