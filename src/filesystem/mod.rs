//! Filesystem capability threaded through every component.
//!
//! The scanner, locator, tree assembler and shredder never touch `std::fs`
//! directly; they go through a [`FileSystem`] so the whole engine can run
//! against [`MemoryFileSystem`] in tests and against [`OsFileSystem`] for real.
//!
//! ## Main Parts
//!
//! - [`FileSystem`] - The capability trait (`read_to_string`, `read_dir`, `metadata`, `remove_all`)
//! - [`OsFileSystem`] - Implementation backed by the operating system
//! - [`MemoryFileSystem`] - In-memory tree for deterministic tests

pub mod memory;
pub mod os;

use std::{io, path::Path};

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

/// What a path points at, after following symlinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, devices, dangling symlinks and anything else.
    Other,
}

/// One child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Final path component of the entry
    pub name: String,

    /// Kind of the entry, with symlinks resolved
    pub kind: EntryKind,
}

impl DirEntry {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The filesystem operations the engine needs.
///
/// Implementations must be shareable across threads: the CLI deletes several
/// folders in parallel through a single instance.
pub trait FileSystem: Send + Sync {
    /// Read a whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file is missing, unreadable,
    /// or not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// List the immediate children of a directory.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `path` is missing, is not a
    /// directory, or cannot be listed.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Stat a path, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing exists at `path`.
    fn metadata(&self, path: &Path) -> io::Result<EntryKind>;

    /// Remove a file or directory tree. An absent target is not an error.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error for anything other than absence.
    fn remove_all(&self, path: &Path) -> io::Result<()>;

    /// Move a file or directory tree to the platform trash.
    ///
    /// Defaults to [`FileSystem::remove_all`] for filesystems without a trash.
    ///
    /// # Errors
    ///
    /// Same as [`FileSystem::remove_all`].
    fn trash(&self, path: &Path) -> io::Result<()> {
        self.remove_all(path)
    }

    /// Total size in bytes of all files under `path`, or `0` if it is absent.
    fn size_of(&self, path: &Path) -> u64;

    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.metadata(path), Ok(EntryKind::Directory))
    }
}
