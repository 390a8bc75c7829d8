//! Scanning configuration.
//!
//! This module defines how the workspace is read: which host convention
//! solution files follow, which file suffix marks a solution, which folder
//! names count as build output, and whether skipped directories are reported.

use crate::{host::HostKind, locator::DEFAULT_BUILD_FOLDERS, scanner::SOLUTION_SUFFIX};

/// Configuration for workspace scanning.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Report directories that could not be listed
    pub verbose: bool,

    /// Line ending and path separator convention of the solution files
    pub host: HostKind,

    /// Folder names treated as build output
    pub build_folders: Vec<String>,

    /// Final name segment identifying solution files
    pub suffix: String,
}

impl ScanOptions {
    /// Options for `host` with the default `bin`/`obj` folders and `.sln` files.
    #[must_use]
    pub fn for_host(host: HostKind) -> Self {
        Self {
            verbose: false,
            host,
            build_folders: DEFAULT_BUILD_FOLDERS.iter().map(ToString::to_string).collect(),
            suffix: SOLUTION_SUFFIX.to_string(),
        }
    }
}
