//! Execution configuration for deletion runs.
//!
//! This module defines the options that control how deletion is carried out,
//! including dry-run mode, interactive selection and trash usage.

/// Configuration for deletion behavior.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExecutionOptions {
    /// Only list build folders and the space they would free
    pub dry_run: bool,

    /// Let the user pick folders from a multi-select prompt
    pub interactive: bool,

    /// Delete without asking for confirmation
    pub yes: bool,

    /// Whether to move folders to the system trash instead of permanently deleting them.
    ///
    /// Defaults to `true`. Set to `false` via the `--permanent` CLI flag or
    /// `use_trash = false` in the config file.
    pub use_trash: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            interactive: false,
            yes: false,
            use_trash: true,
        }
    }
}
