//! Two-level view of a workspace: solution projects and their build folders.
//!
//! The tree holds no state between calls. Every [`SolutionTree::list_roots`]
//! rescans the workspace and every [`SolutionTree::list_children`] relists the
//! project directory, so refreshing after a deletion is just calling them again.

use std::path::{Path, PathBuf};

use crate::{
    error::ShredError,
    filesystem::FileSystem,
    host::HostKind,
    locator::BuildFolderLocator,
    project::{BuildFolderNode, ProjectNode},
    scanner::{DirectoryScanner, SOLUTION_SUFFIX, SkippedDirectory},
    solution::{ProjectIndexEntry, SolutionParser},
};

/// Projects found in a workspace, plus any directories the scan had to skip.
#[derive(Clone, Debug, Default)]
pub struct WorkspaceListing {
    pub projects: Vec<ProjectNode>,
    pub skipped: Vec<SkippedDirectory>,
}

/// Builds the solution → project → build folder hierarchy on demand.
pub struct SolutionTree<'a> {
    fs: &'a dyn FileSystem,
    parser: SolutionParser,
    locator: BuildFolderLocator<'a>,
    suffix: String,
}

impl<'a> SolutionTree<'a> {
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, host: HostKind) -> Self {
        Self {
            fs,
            parser: SolutionParser::new(host),
            locator: BuildFolderLocator::new(fs),
            suffix: SOLUTION_SUFFIX.to_string(),
        }
    }

    /// Look for solution files ending in `.<suffix>` instead of `.sln`.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Recognize `names` as build folders instead of the default `bin`/`obj`.
    #[must_use]
    pub fn with_build_folders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locator = self.locator.with_names(names);
        self
    }

    /// List every project declared by any solution file under `workspace_root`.
    ///
    /// An unset or missing workspace, or one without solution files, yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ShredError::DirectoryUnreadable`] if the workspace root exists
    /// but cannot be listed.
    pub fn list_roots(
        &self,
        workspace_root: Option<&Path>,
    ) -> Result<Vec<ProjectNode>, ShredError> {
        self.list_workspace(workspace_root)
            .map(|listing| listing.projects)
    }

    /// Same as [`SolutionTree::list_roots`], also reporting the subdirectories
    /// that were skipped because they could not be listed.
    ///
    /// # Errors
    ///
    /// Returns [`ShredError::DirectoryUnreadable`] if the workspace root exists
    /// but cannot be listed.
    pub fn list_workspace(
        &self,
        workspace_root: Option<&Path>,
    ) -> Result<WorkspaceListing, ShredError> {
        let Some(root) = workspace_root else {
            return Ok(WorkspaceListing::default());
        };

        if !self.fs.exists(root) {
            return Ok(WorkspaceListing::default());
        }

        let report = DirectoryScanner::new(self.fs).find_files(root, &self.suffix)?;

        let projects = report
            .files
            .iter()
            .flat_map(|solution| {
                self.parser
                    .parse_file(self.fs, solution)
                    .into_iter()
                    .map(move |entry| self.resolve(solution, entry))
            })
            .collect();

        Ok(WorkspaceListing {
            projects,
            skipped: report.skipped,
        })
    }

    /// List the build folders currently present in a project's directory.
    #[must_use]
    pub fn list_children(&self, node: &ProjectNode) -> Vec<BuildFolderNode> {
        self.locator.locate(&node.absolute_path)
    }

    fn resolve(&self, solution: &Path, entry: ProjectIndexEntry) -> ProjectNode {
        let absolute_path = Self::project_dir(solution, &entry);
        let has_build_outputs = !self.locator.locate(&absolute_path).is_empty();

        ProjectNode {
            label: entry.name,
            absolute_path,
            has_build_outputs,
            solution_path: solution.to_path_buf(),
        }
    }

    /// The directory holding the project file.
    ///
    /// With an explicit path this is the directory of the `.csproj`, relative
    /// to the solution; name-only declarations live in `<solution dir>/<name>`.
    fn project_dir(solution: &Path, entry: &ProjectIndexEntry) -> PathBuf {
        let solution_dir = solution.parent().unwrap_or_else(|| Path::new(""));

        match &entry.relative_path {
            Some(relative) => match Path::new(relative).parent() {
                Some(dir) if !dir.as_os_str().is_empty() => solution_dir.join(dir),
                _ => solution_dir.to_path_buf(),
            },
            None => solution_dir.join(&entry.name),
        }
    }
}
