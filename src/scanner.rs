//! Recursive discovery of files by suffix.
//!
//! The scanner walks the whole workspace tree, collecting every file whose
//! final dot-delimited name segment equals the requested suffix (`"sln"` for
//! solution files). The root must be listable; subdirectories that are not are
//! skipped and reported back instead of aborting the scan.

use std::path::{Path, PathBuf};

use crate::{
    error::ShredError,
    filesystem::{DirEntry, EntryKind, FileSystem},
};

/// Suffix of Visual Studio solution files.
pub const SOLUTION_SUFFIX: &str = "sln";

/// A directory the scanner could not list, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedDirectory {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a scan: the files found and the directories that were skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Matching files, depth-first, siblings in name order
    pub files: Vec<PathBuf>,

    /// Subdirectories that could not be listed during traversal
    pub skipped: Vec<SkippedDirectory>,
}

/// Recursively finds files under a root directory.
pub struct DirectoryScanner<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> DirectoryScanner<'a> {
    #[must_use]
    pub const fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Find every file under `root` whose name ends in `.{suffix}`.
    ///
    /// The comparison is case-sensitive and only looks at the segment after the
    /// last dot. Directories are descended into but never returned. Symlinked
    /// directories are followed, so a symlink cycle will not terminate.
    ///
    /// # Errors
    ///
    /// Returns [`ShredError::DirectoryUnreadable`] if `root` itself cannot be listed.
    pub fn find_files(&self, root: &Path, suffix: &str) -> Result<ScanReport, ShredError> {
        let entries = self
            .fs
            .read_dir(root)
            .map_err(|source| ShredError::DirectoryUnreadable {
                path: root.to_path_buf(),
                source,
            })?;

        let mut report = ScanReport::default();
        self.visit(root, entries, suffix, &mut report);

        Ok(report)
    }

    fn visit(
        &self,
        dir: &Path,
        entries: Vec<DirEntry>,
        suffix: &str,
        report: &mut ScanReport,
    ) {
        for entry in entries {
            let path = dir.join(&entry.name);

            if entry.is_dir() {
                match self.fs.read_dir(&path) {
                    Ok(children) => self.visit(&path, children, suffix, report),
                    Err(e) => report.skipped.push(SkippedDirectory {
                        path,
                        reason: e.to_string(),
                    }),
                }
            } else if entry.kind == EntryKind::File
                && Self::has_suffix(&entry.name, suffix)
            {
                report.files.push(path);
            }
        }
    }

    fn has_suffix(name: &str, suffix: &str) -> bool {
        name.rsplit('.').next() == Some(suffix)
    }
}
