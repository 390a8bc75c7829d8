//! JSON output for `--json` mode.
//!
//! Every run in JSON mode prints exactly one document to stdout, so the tool
//! can be driven by editors and scripts.

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    cleaner::CleanResult,
    project::{ProjectFolders, Projects},
    shredder::ShredderOutcome,
};

/// Totals over the listed projects.
#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub project_count: usize,
    pub folder_count: usize,
    pub total_size: u64,
}

/// Document emitted after listing or cleaning a workspace.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// `"list"` for a dry run, `"cleanup"` after deleting
    pub mode: &'static str,
    pub projects: &'a [ProjectFolders],
    pub summary: JsonSummary,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<&'a CleanResult>,

    /// Build folders still present after the post-cleanup refresh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_folders: Option<usize>,
}

impl<'a> JsonOutput<'a> {
    fn summary(projects: &Projects) -> JsonSummary {
        JsonSummary {
            project_count: projects.len(),
            folder_count: projects.folder_count(),
            total_size: projects.get_total_size(),
        }
    }

    #[must_use]
    pub fn from_listing(projects: &'a Projects) -> Self {
        Self {
            mode: "list",
            projects: projects.as_slice(),
            summary: Self::summary(projects),
            cleanup: None,
            remaining_folders: None,
        }
    }

    #[must_use]
    pub fn from_cleanup(
        projects: &'a Projects,
        result: &'a CleanResult,
        remaining_folders: usize,
    ) -> Self {
        Self {
            mode: "cleanup",
            projects: projects.as_slice(),
            summary: Self::summary(projects),
            cleanup: Some(result),
            remaining_folders: Some(remaining_folders),
        }
    }
}

/// Document emitted after deleting a single folder.
#[derive(Debug, Serialize)]
pub struct JsonDeleteOutput {
    pub path: PathBuf,
    pub succeeded: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonDeleteOutput {
    #[must_use]
    pub fn new(path: PathBuf, outcome: &ShredderOutcome) -> Self {
        Self {
            path,
            succeeded: outcome.succeeded,
            error: outcome.failure.as_ref().map(ToString::to_string),
        }
    }
}
