//! Lookup of build output folders inside a project directory.

use std::{collections::BTreeSet, path::Path};

use crate::{filesystem::FileSystem, project::BuildFolderNode};

/// Folder names produced by `dotnet build` / MSBuild.
pub const DEFAULT_BUILD_FOLDERS: [&str; 2] = ["bin", "obj"];

/// Finds recognized build folders among the immediate children of a directory.
pub struct BuildFolderLocator<'a> {
    fs: &'a dyn FileSystem,
    names: BTreeSet<String>,
}

impl<'a> BuildFolderLocator<'a> {
    /// Create a locator recognizing [`DEFAULT_BUILD_FOLDERS`].
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            names: DEFAULT_BUILD_FOLDERS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Replace the recognized folder names.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// List the recognized build folders directly inside `project_dir`.
    ///
    /// Only directories count; a file called `bin` is not a build folder. A
    /// missing or unreadable `project_dir` simply has no build folders.
    #[must_use]
    pub fn locate(&self, project_dir: &Path) -> Vec<BuildFolderNode> {
        let Ok(entries) = self.fs.read_dir(project_dir) else {
            return Vec::new();
        };

        entries
            .into_iter()
            .filter(|entry| entry.is_dir() && self.names.contains(&entry.name))
            .map(|entry| BuildFolderNode::new(entry.name, project_dir))
            .collect()
    }
}
