//! Project and build folder records.
//!
//! This module contains the plain data produced by the solution tree and the
//! collection type the command line uses to present and select build folders.
//!
//! ## Main Parts
//!
//! - [`ProjectNode`] - A project declared by a solution, anchored to a directory
//! - [`BuildFolderNode`] - One `bin/` or `obj/` folder inside a project directory
//! - [`Projects`] - Projects with their sized build folders, for reporting and selection

#[allow(clippy::module_inception)]
pub mod project;
pub mod projects;

pub use project::{BuildFolderNode, ProjectNode};
pub use projects::{ProjectFolders, Projects, SizedFolder};
