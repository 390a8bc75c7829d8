//! [`FileSystem`] backed by the real operating system.

use std::{fs, io, path::Path};

use walkdir::WalkDir;

use super::{DirEntry, EntryKind, FileSystem};

/// The host filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn kind_of(metadata: &fs::Metadata) -> EntryKind {
    if metadata.is_dir() {
        EntryKind::Directory
    } else if metadata.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Treat `NotFound` as success, matching forced removal semantics.
fn absent_is_ok(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Metadata of `path` without following symlinks, or `None` if it does not exist.
///
/// Any other failure, such as a permission error on a parent, is returned.
fn existing(path: &Path) -> io::Result<Option<fs::Metadata>> {
    match fs::symlink_metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

impl FileSystem for OsFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // `fs::metadata` follows symlinks; a dangling link is reported as `Other`
            let kind = fs::metadata(entry.path()).map_or(EntryKind::Other, |m| kind_of(&m));

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
        fs::metadata(path).map(|m| kind_of(&m))
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        let Some(metadata) = existing(path)? else {
            return Ok(());
        };

        if metadata.is_dir() {
            absent_is_ok(fs::remove_dir_all(path))
        } else {
            absent_is_ok(fs::remove_file(path))
        }
    }

    fn trash(&self, path: &Path) -> io::Result<()> {
        if existing(path)?.is_none() {
            return Ok(());
        }

        trash::delete(path).map_err(|e| io::Error::other(e.to_string()))
    }

    fn size_of(&self, path: &Path) -> u64 {
        let mut total_size = 0u64;

        for entry in WalkDir::new(path).into_iter().flatten() {
            if entry.file_type().is_file()
                && let Ok(metadata) = entry.metadata()
            {
                total_size += metadata.len();
            }
        }

        total_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_dir_reports_kinds_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("obj")).unwrap();
        fs::write(tmp.path().join("App.csproj"), "<Project />").unwrap();

        let entries = OsFileSystem.read_dir(tmp.path()).unwrap();

        assert_eq!(
            entries,
            vec![
                DirEntry {
                    name: "App.csproj".to_string(),
                    kind: EntryKind::File
                },
                DirEntry {
                    name: "obj".to_string(),
                    kind: EntryKind::Directory
                },
            ]
        );
    }

    #[test]
    fn test_read_dir_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = OsFileSystem.read_dir(&tmp.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_all_directory_file_and_absent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("bin/Debug/net8.0");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("App.dll"), "binary").unwrap();
        let file = tmp.path().join("obj");
        fs::write(&file, "not a folder").unwrap();

        OsFileSystem.remove_all(&tmp.path().join("bin")).unwrap();
        OsFileSystem.remove_all(&file).unwrap();
        OsFileSystem.remove_all(&tmp.path().join("never-existed")).unwrap();

        assert!(!tmp.path().join("bin").exists());
        assert!(!file.exists());
    }

    #[test]
    fn test_trash_absent_target_is_ok() {
        let tmp = TempDir::new().unwrap();
        OsFileSystem.trash(&tmp.path().join("never-existed")).unwrap();
    }

    #[test]
    fn test_stat_failure_other_than_absence_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("App.csproj");
        fs::write(&file, "<Project />").unwrap();

        // A path below a regular file cannot be inspected at all
        let target = file.join("bin");

        let trashed = OsFileSystem.trash(&target).unwrap_err();
        assert_ne!(trashed.kind(), io::ErrorKind::NotFound);

        let removed = OsFileSystem.remove_all(&target).unwrap_err();
        assert_ne!(removed.kind(), io::ErrorKind::NotFound);
        assert!(file.exists());
    }

    #[test]
    fn test_size_of_sums_nested_files() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("bin/Release");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("a.dll"), "12345").unwrap();
        fs::write(tmp.path().join("bin/b.pdb"), "123").unwrap();

        assert_eq!(OsFileSystem.size_of(&tmp.path().join("bin")), 8);
        assert_eq!(OsFileSystem.size_of(&tmp.path().join("missing")), 0);
    }
}
