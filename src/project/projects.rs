//! Collection of projects with their build folders, for the command line.
//!
//! This module provides the `Projects` struct, which pairs each
//! [`ProjectNode`] with its sized [`BuildFolderNode`]s and offers the
//! reporting and interactive selection the binary needs.

use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter, Result as FmtResult},
};

use anyhow::Result;
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use inquire::MultiSelect;
use serde::Serialize;

use crate::{filesystem::FileSystem, tree::SolutionTree};

use super::{BuildFolderNode, ProjectNode};

/// A build folder together with its size on disk at listing time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SizedFolder {
    #[serde(flatten)]
    pub node: BuildFolderNode,

    /// Size of all files under the folder, in bytes
    pub size: u64,
}

impl Display for SizedFolder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "📁 {} ({})",
            self.node.path().display(),
            format_size(self.size, DECIMAL)
        )
    }
}

/// One project and the build folders currently inside it.
#[derive(Clone, Debug, Serialize)]
pub struct ProjectFolders {
    #[serde(flatten)]
    pub project: ProjectNode,
    pub folders: Vec<SizedFolder>,
}

impl ProjectFolders {
    #[must_use]
    pub fn size(&self) -> u64 {
        self.folders.iter().map(|f| f.size).sum()
    }
}

/// All projects of a workspace, expanded one level.
pub struct Projects(Vec<ProjectFolders>);

impl From<Vec<ProjectFolders>> for Projects {
    fn from(projects: Vec<ProjectFolders>) -> Self {
        Self(projects)
    }
}

impl Projects {
    /// Expand every root node through the tree and measure each build folder.
    ///
    /// Projects whose node is not expandable keep an empty folder list.
    #[must_use]
    pub fn expand(tree: &SolutionTree<'_>, fs: &dyn FileSystem, roots: Vec<ProjectNode>) -> Self {
        roots
            .into_iter()
            .map(|project| {
                let folders = if project.has_build_outputs {
                    tree.list_children(&project)
                        .into_iter()
                        .map(|node| SizedFolder {
                            size: fs.size_of(&node.path()),
                            node,
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                ProjectFolders { project, folders }
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ProjectFolders] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct build folders across all projects.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.folders().len()
    }

    /// Total size in bytes of every distinct build folder in the collection.
    #[must_use]
    pub fn get_total_size(&self) -> u64 {
        self.folders().iter().map(|f| f.size).sum()
    }

    /// Every build folder, in tree order.
    ///
    /// A project declared by several solutions appears once per solution in
    /// the tree, but its folders are returned only once.
    #[must_use]
    pub fn folders(&self) -> Vec<SizedFolder> {
        let mut seen = BTreeSet::new();

        self.0
            .iter()
            .flat_map(|p| p.folders.iter())
            .filter(|f| seen.insert(f.node.path()))
            .cloned()
            .collect()
    }

    /// Print the projects as a tree, with per-folder sizes.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   📄 App.sln
    ///     🔷 App (/ws/App)  13.5 MB
    ///        └─ bin  12.3 MB
    ///        └─ obj  1.2 MB
    ///     🔹 Tools (/ws/Tools) no build output
    /// ```
    pub fn print_tree(&self) {
        let mut current_solution = None;

        for entry in &self.0 {
            if current_solution != Some(&entry.project.solution_path) {
                current_solution = Some(&entry.project.solution_path);
                println!(
                    "  📄 {}",
                    entry.project.solution_path.display().to_string().bold()
                );
            }

            if entry.folders.is_empty() {
                println!(
                    "    🔹 {} {}",
                    entry.project,
                    "no build output".dimmed()
                );
                continue;
            }

            println!(
                "    🔷 {}  {}",
                entry.project.to_string().bright_white(),
                format_size(entry.size(), DECIMAL).yellow()
            );
            for folder in &entry.folders {
                println!(
                    "       └─ {}  {}",
                    folder.node.name.cyan(),
                    format_size(folder.size, DECIMAL).yellow()
                );
            }
        }
    }

    /// Print totals for the collection.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   🔷 3 projects with build output (of 4)
    ///   📁 5 build folders
    ///   💾 Total reclaimable space: 40.1 MB
    /// ```
    pub fn print_summary(&self, total_size: u64) {
        let with_output = self.0.iter().filter(|p| !p.folders.is_empty()).count();

        println!(
            "  🔷 {} projects with build output (of {})",
            with_output.to_string().bright_white(),
            self.len()
        );
        println!(
            "  📁 {} build folders",
            self.folder_count().to_string().bright_white()
        );
        println!(
            "  💾 Total reclaimable space: {}",
            format_size(total_size, DECIMAL).bright_green().bold()
        );
    }

    /// Let the user pick which build folders to delete. All are preselected.
    ///
    /// # Errors
    ///
    /// Fails if the terminal is not interactive or the prompt is cancelled.
    pub fn interactive_selection(&self) -> Result<Vec<SizedFolder>> {
        let selected = MultiSelect::new("Select build folders to delete:", self.folders())
            .with_all_selected_by_default()
            .prompt()?;

        Ok(selected)
    }
}
