//! Tree node records produced by the solution tree.
//!
//! Both node types are plain values built fresh on every request. Nothing in
//! them is ever updated in place: after a deletion, ask the tree again.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

use serde::Serialize;

/// A project declared by a solution, anchored to a directory on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectNode {
    /// Display name, taken from the solution declaration
    pub label: String,

    /// Directory expected to contain the project's `bin/` and `obj/` folders
    pub absolute_path: PathBuf,

    /// Whether at least one recognized build folder exists right now.
    ///
    /// Decides whether the node is shown as expandable.
    pub has_build_outputs: bool,

    /// The solution file that declared this project
    pub solution_path: PathBuf,
}

impl Display for ProjectNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.label, self.absolute_path.display())
    }
}

/// One build output folder inside a project directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildFolderNode {
    /// Folder name, one of the recognized build folder names
    pub name: String,

    /// Directory the folder lives in
    pub parent_project_path: PathBuf,
}

impl BuildFolderNode {
    #[must_use]
    pub fn new(name: impl Into<String>, parent_project_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent_project_path: parent_project_path.into(),
        }
    }

    /// Full path of the folder.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.parent_project_path.join(&self.name)
    }

    #[must_use]
    pub fn parent(&self) -> &Path {
        &self.parent_project_path
    }
}

impl Display for BuildFolderNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.path().display())
    }
}
