//! Bulk deletion of selected build folders.
//!
//! This module runs the [`FolderShredder`] over many folders in parallel,
//! reports progress, and summarizes what was freed. Each folder is deleted
//! independently, so one failure never stops the others.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use colored::Colorize;
use humansize::{DECIMAL, format_size};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use crate::{filesystem::FileSystem, project::SizedFolder, shredder::FolderShredder};

/// What happened to a batch of deletions.
#[derive(Debug, Default, Serialize)]
pub struct CleanResult {
    /// Folders that are gone
    pub cleaned: Vec<PathBuf>,

    /// One message per folder that could not be deleted
    pub errors: Vec<String>,

    /// Bytes freed, as measured when the folders were listed
    pub freed: u64,
}

/// Deletes build folders in bulk.
pub struct Cleaner;

impl Cleaner {
    /// Delete every folder in `folders`, in parallel.
    ///
    /// When `quiet` is set no progress is drawn, which keeps `--json` output
    /// clean.
    ///
    /// # Panics
    ///
    /// Panics if the hard-coded progress bar template is invalid.
    pub fn clean_folders(
        fs: &dyn FileSystem,
        folders: Vec<SizedFolder>,
        use_trash: bool,
        quiet: bool,
    ) -> CleanResult {
        let shredder = FolderShredder::new(fs).with_trash(use_trash);

        let progress = if quiet {
            ProgressBar::hidden()
        } else {
            println!("\n{}", "🧹 Deleting build folders...".cyan());

            let pb = ProgressBar::new(folders.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("█▉▊▋▌▍▎▏  "),
            );
            pb
        };

        let result = Arc::new(Mutex::new(CleanResult::default()));

        folders.into_par_iter().for_each(|folder| {
            let outcome = shredder.delete_node(&folder.node);

            // A poisoned lock still holds valid counters
            let mut result = result
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);

            match outcome.failure {
                None => {
                    result.freed += folder.size;
                    result.cleaned.push(folder.node.path());
                    progress.set_message(format!(
                        "Deleted {} ({})",
                        folder.node.path().display(),
                        format_size(folder.size, DECIMAL)
                    ));
                }
                Some(error) => result.errors.push(error.to_string()),
            }
            drop(result);

            progress.inc(1);
        });

        progress.finish_with_message("✅ Cleanup complete");

        let mut result = Arc::try_unwrap(result)
            .map(|m| m.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner))
            .unwrap_or_default();
        result.cleaned.sort();
        result.errors.sort();
        result
    }

    /// Print the outcome of [`Cleaner::clean_folders`].
    pub fn print_summary(result: &CleanResult) {
        if !result.errors.is_empty() {
            println!("\n{}", "⚠️  Some build folders could not be deleted:".yellow());
            for error in &result.errors {
                eprintln!("  {}", error.red());
            }
        }

        println!("\n{}", "📊 Cleanup Summary:".bold());
        println!(
            "  ✅ Deleted: {} folders",
            result.cleaned.len().to_string().green()
        );

        if !result.errors.is_empty() {
            println!(
                "  ❌ Failed: {} folders",
                result.errors.len().to_string().red()
            );
        }

        println!(
            "  💾 Total space freed: {}",
            format_size(result.freed, DECIMAL).bright_green().bold()
        );
    }
}
