//! In-memory [`FileSystem`] used by tests and by callers that want to preview
//! a layout without touching a disk.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use super::{DirEntry, EntryKind, FileSystem};

#[derive(Clone, Debug)]
enum Node {
    File(String),
    Directory,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: BTreeMap<PathBuf, Node>,
    denied: BTreeSet<PathBuf>,
}

/// A tree of directories and text files held in memory.
///
/// Paths marked with [`MemoryFileSystem::deny`] refuse to be listed or read,
/// and refuse removal of themselves and of their direct children, each with
/// `PermissionDenied`.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    tree: Mutex<Tree>,
}

impl MemoryFileSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        // A poisoned lock only means a test panicked mid-operation; the map is still usable
        self.tree.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn insert_ancestors(tree: &mut Tree, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            tree.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Directory);
        }
    }

    /// Create a directory and all of its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        let path = path.as_ref();
        let mut tree = self.lock();
        Self::insert_ancestors(&mut tree, path);
        tree.nodes.insert(path.to_path_buf(), Node::Directory);
        drop(tree);
        self
    }

    /// Create a text file, creating its parent directories as needed.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<String>) -> &Self {
        let path = path.as_ref();
        let mut tree = self.lock();
        Self::insert_ancestors(&mut tree, path);
        tree.nodes
            .insert(path.to_path_buf(), Node::File(contents.into()));
        drop(tree);
        self
    }

    /// Make `path` behave as if the current user lacked permission on it.
    pub fn deny(&self, path: impl AsRef<Path>) -> &Self {
        self.lock().denied.insert(path.as_ref().to_path_buf());
        self
    }

    fn permission_denied(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("permission denied: {}", path.display()),
        )
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        )
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let tree = self.lock();
        if tree.denied.contains(path) {
            return Err(Self::permission_denied(path));
        }

        match tree.nodes.get(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Directory) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(Self::not_found(path)),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let tree = self.lock();
        if tree.denied.contains(path) {
            return Err(Self::permission_denied(path));
        }

        match tree.nodes.get(path) {
            Some(Node::Directory) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("not a directory: {}", path.display()),
                ));
            }
            None => return Err(Self::not_found(path)),
        }

        let mut entries: Vec<DirEntry> = tree
            .nodes
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, node)| {
                let name = child.file_name()?.to_string_lossy().into_owned();
                let kind = match node {
                    Node::File(_) => EntryKind::File,
                    Node::Directory => EntryKind::Directory,
                };
                Some(DirEntry { name, kind })
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryKind> {
        match self.lock().nodes.get(path) {
            Some(Node::File(_)) => Ok(EntryKind::File),
            Some(Node::Directory) => Ok(EntryKind::Directory),
            None => Err(Self::not_found(path)),
        }
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        let mut tree = self.lock();

        let parent_denied = path.parent().is_some_and(|p| tree.denied.contains(p));
        if tree.denied.contains(path) || parent_denied {
            return Err(Self::permission_denied(path));
        }

        if !tree.nodes.contains_key(path) {
            return Ok(());
        }

        tree.nodes.retain(|candidate, _| !candidate.starts_with(path));
        Ok(())
    }

    fn size_of(&self, path: &Path) -> u64 {
        self.lock()
            .nodes
            .iter()
            .filter(|(candidate, _)| candidate.starts_with(path))
            .map(|(_, node)| match node {
                Node::File(contents) => contents.len() as u64,
                Node::Directory => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_creates_parents() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/ws/App/App.csproj", "<Project />");

        assert!(fs.is_dir(Path::new("/ws")));
        assert!(fs.is_dir(Path::new("/ws/App")));
        assert_eq!(
            fs.metadata(Path::new("/ws/App/App.csproj")).unwrap(),
            EntryKind::File
        );
    }

    #[test]
    fn test_read_dir_lists_only_direct_children() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/App/bin/Debug").add_dir("/ws/App/obj");

        let names: Vec<_> = fs
            .read_dir(Path::new("/ws/App"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, vec!["bin", "obj"]);
    }

    #[test]
    fn test_denied_directory_cannot_be_listed() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/secret").deny("/ws/secret");

        let err = fs.read_dir(Path::new("/ws/secret")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_remove_all_drops_subtree() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/ws/App/bin/Debug/App.dll", "dll")
            .add_dir("/ws/App/obj");

        fs.remove_all(Path::new("/ws/App/bin")).unwrap();

        assert!(!fs.exists(Path::new("/ws/App/bin")));
        assert!(!fs.exists(Path::new("/ws/App/bin/Debug/App.dll")));
        assert!(fs.exists(Path::new("/ws/App/obj")));
    }

    #[test]
    fn test_remove_all_under_denied_parent_fails() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/ws/App/bin").deny("/ws/App");

        let err = fs.remove_all(Path::new("/ws/App/bin")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.exists(Path::new("/ws/App/bin")));
    }

    #[test]
    fn test_size_of_counts_file_bytes() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/ws/App/bin/a.dll", "12345")
            .add_file("/ws/App/bin/x/b.pdb", "123");

        assert_eq!(fs.size_of(Path::new("/ws/App/bin")), 8);
        assert_eq!(fs.size_of(Path::new("/ws/Other")), 0);
    }
}
