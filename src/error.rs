//! Error types shared by the scanning and deletion engine.
//!
//! Parsing never fails and discovery degrades to empty results, so only three
//! failure kinds exist: an unsupported host convention, an unreadable scan
//! root, and a failed deletion.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by the core.
#[derive(Debug, Error)]
pub enum ShredError {
    /// The platform (or a configured value) is not one of the supported host conventions.
    ///
    /// This is a configuration-level failure: nothing in the core can run without
    /// knowing which line delimiter and path separator to use.
    #[error("Unsupported host convention: {0}")]
    UnsupportedHostKind(String),

    /// The directory could not be enumerated.
    #[error("Could not enumerate {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removing a build folder failed.
    #[error("Failed to delete {}: {reason}", path.display())]
    DeletionFailed {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },
}

impl ShredError {
    pub(crate) fn deletion_failed(path: PathBuf, err: &io::Error) -> Self {
        Self::DeletionFailed {
            path,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}
