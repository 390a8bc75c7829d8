//! Deletion of build folders.
//!
//! The shredder removes `parent/name` recursively and with force semantics: a
//! target that is already gone counts as deleted. It never returns `Err`;
//! every failure is folded into the returned [`ShredderOutcome`].

use std::{
    io,
    path::{Component, Path},
};

use crate::{error::ShredError, filesystem::FileSystem, project::BuildFolderNode};

/// Result of one deletion attempt.
#[derive(Debug)]
pub struct ShredderOutcome {
    pub succeeded: bool,

    /// Why the deletion failed; present iff `succeeded` is `false`
    pub failure: Option<ShredError>,
}

impl ShredderOutcome {
    #[must_use]
    pub const fn success() -> Self {
        Self {
            succeeded: true,
            failure: None,
        }
    }

    #[must_use]
    pub fn failed(error: ShredError) -> Self {
        Self {
            succeeded: false,
            failure: Some(error),
        }
    }

    /// Convert into a `Result` for callers that want to use `?`.
    ///
    /// # Errors
    ///
    /// Returns the captured failure if the deletion did not succeed.
    pub fn into_result(self) -> Result<(), ShredError> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Deletes folders through a [`FileSystem`].
pub struct FolderShredder<'a> {
    fs: &'a dyn FileSystem,
    use_trash: bool,
}

impl<'a> FolderShredder<'a> {
    /// Create a shredder that deletes permanently.
    #[must_use]
    pub const fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            use_trash: false,
        }
    }

    /// Move targets to the system trash instead of deleting them permanently.
    #[must_use]
    pub const fn with_trash(mut self, use_trash: bool) -> Self {
        self.use_trash = use_trash;
        self
    }

    /// Remove `parent/name`, whether it is a directory tree, a file, or absent.
    ///
    /// `name` must be a single plain path component. Anything else (empty,
    /// `.`, `..`, absolute or nested) fails without touching the filesystem.
    #[must_use]
    pub fn delete(&self, parent: &Path, name: &str) -> ShredderOutcome {
        let target = parent.join(name);

        if !is_single_folder_name(name) {
            let error = io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{name:?} is not a folder name inside {}", parent.display()),
            );
            return ShredderOutcome::failed(ShredError::deletion_failed(target, &error));
        }

        let result = if self.use_trash {
            self.fs.trash(&target)
        } else {
            self.fs.remove_all(&target)
        };

        match result {
            Ok(()) => ShredderOutcome::success(),
            Err(e) => ShredderOutcome::failed(ShredError::deletion_failed(target, &e)),
        }
    }

    /// Remove the folder a [`BuildFolderNode`] points at.
    #[must_use]
    pub fn delete_node(&self, node: &BuildFolderNode) -> ShredderOutcome {
        self.delete(node.parent(), &node.name)
    }
}

fn is_single_folder_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFileSystem;
    use std::path::PathBuf;

    #[test]
    fn test_delete_removes_directory_tree() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/ws/App/bin/Debug/net8.0/App.dll", "binary")
            .add_dir("/ws/App/obj");

        let outcome = FolderShredder::new(&fs).delete(Path::new("/ws/App"), "bin");

        assert!(outcome.succeeded);
        assert!(outcome.failure.is_none());
        assert!(!fs.exists(Path::new("/ws/App/bin")));
        assert!(fs.exists(Path::new("/ws/App/obj")));
    }

    #[test]
    fn test_delete_absent_target_succeeds() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/App");

        let shredder = FolderShredder::new(&fs);

        assert!(shredder.delete(Path::new("/ws/App"), "obj").succeeded);
        assert!(shredder.delete(Path::new("/nowhere"), "bin").succeeded);
    }

    #[test]
    fn test_delete_removes_plain_file() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/ws/App/bin", "stray file");

        assert!(FolderShredder::new(&fs)
            .delete(Path::new("/ws/App"), "bin")
            .succeeded);
        assert!(!fs.exists(Path::new("/ws/App/bin")));
    }

    #[test]
    fn test_delete_without_permission_reports_failure() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/App/bin").deny("/ws/App");

        let outcome = FolderShredder::new(&fs).delete(Path::new("/ws/App"), "bin");

        assert!(!outcome.succeeded);
        match outcome.failure {
            Some(ShredError::DeletionFailed { path, kind, reason }) => {
                assert_eq!(path, PathBuf::from("/ws/App/bin"));
                assert_eq!(kind, io::ErrorKind::PermissionDenied);
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(fs.exists(Path::new("/ws/App/bin")));
    }

    #[test]
    fn test_delete_node_and_into_result() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/App/obj");

        let node = BuildFolderNode::new("obj", "/ws/App");
        let shredder = FolderShredder::new(&fs);

        assert!(shredder.delete_node(&node).into_result().is_ok());
        assert!(!fs.exists(&node.path()));

        fs.add_dir("/ws/App/obj").deny("/ws/App/obj");
        assert!(shredder.delete_node(&node).into_result().is_err());
    }

    #[test]
    fn test_delete_rejects_names_outside_parent() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/ws/App/App.csproj", "<Project />")
            .add_dir("/ws/App/bin")
            .add_dir("/ws/Other/bin");

        let shredder = FolderShredder::new(&fs);

        for name in ["", ".", "..", "../Other", "bin/..", "/ws/Other"] {
            let outcome = shredder.delete(Path::new("/ws/App"), name);

            assert!(!outcome.succeeded, "{name:?} should be rejected");
            assert!(matches!(
                outcome.failure,
                Some(ShredError::DeletionFailed {
                    kind: io::ErrorKind::InvalidInput,
                    ..
                })
            ));
        }

        assert!(fs.exists(Path::new("/ws/App/App.csproj")));
        assert!(fs.exists(Path::new("/ws/App/bin")));
        assert!(fs.exists(Path::new("/ws/Other/bin")));
    }

    #[test]
    fn test_trash_mode_falls_back_to_removal_on_memory_fs() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/App/bin");

        let outcome = FolderShredder::new(&fs)
            .with_trash(true)
            .delete(Path::new("/ws/App"), "bin");

        assert!(outcome.succeeded);
        assert!(!fs.exists(Path::new("/ws/App/bin")));
    }
}
