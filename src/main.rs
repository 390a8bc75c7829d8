//! # sln-shredder
//!
//! Lists and removes stale `bin/` and `obj/` folders of the projects declared
//! in Visual Studio solution files.
//!
//! The tool searches a workspace for `*.sln` files, reads the projects each one
//! declares, and shows the build folders found next to every project. Folders
//! can then be deleted all at once, picked interactively, or one at a time.
//!
//! ## Usage
//!
//! ```bash
//! # List and clean the current directory
//! sln-shredder
//!
//! # Preview only
//! sln-shredder ~/source/repos --dry-run
//!
//! # Pick folders, delete permanently
//! sln-shredder --interactive --permanent
//!
//! # Delete a single folder
//! sln-shredder --delete ./src/App obj
//! ```

mod cli;

use std::{
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::{Result, bail};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Confirm;
use sln_shredder::{
    cleaner::Cleaner,
    config::{FileConfig, ScanOptions},
    filesystem::{FileSystem, OsFileSystem},
    output::{JsonDeleteOutput, JsonOutput},
    project::Projects,
    shredder::FolderShredder,
    tree::SolutionTree,
};

/// Entry point for the sln-shredder application.
///
/// Errors from [`inner_main`] are printed to stderr and turn into a non-zero
/// exit status.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments and loads the config file
/// 2. Resolves the host convention (fatal if unsupported)
/// 3. Either deletes the single folder given to `--delete`, or
/// 4. Lists the workspace tree, selects folders and deletes them
/// 5. Refreshes the tree after deleting and reports what remains
///
/// # Errors
///
/// This function can return errors from:
/// - Host convention resolution
/// - Listing the workspace root
/// - Interactive prompts
/// - JSON serialization
/// - A failed `--delete`
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    let json_mode = args.json();

    let file_config = match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    };

    let scan_options = args.scan_options(&file_config)?;
    let execution_options = args.execution_options(&file_config);
    let fs = OsFileSystem::new();

    if let Some((parent, name)) = args.delete_target() {
        return delete_single(&fs, &parent, &name, execution_options.use_trash, json_mode);
    }

    if json_mode && execution_options.interactive {
        bail!("--json and --interactive cannot be used together");
    }

    let dir = args.directory(&file_config);
    let tree = SolutionTree::new(&fs, scan_options.host)
        .with_build_folders(scan_options.build_folders.clone())
        .with_suffix(scan_options.suffix.clone());

    let projects = scan_workspace(&tree, &fs, &dir, &scan_options, json_mode)?;

    if projects.is_empty() {
        if json_mode {
            println!("{}", serde_json::to_string_pretty(&JsonOutput::from_listing(&projects))?);
        } else {
            println!("{}", "✨ No solution projects found!".green());
        }
        return Ok(());
    }

    let total_size = projects.get_total_size();

    if !json_mode {
        println!("\n{}", "📊 Found projects:".bold());
        projects.print_tree();
        println!();
        projects.print_summary(total_size);
    }

    if projects.folder_count() == 0 {
        if json_mode {
            println!("{}", serde_json::to_string_pretty(&JsonOutput::from_listing(&projects))?);
        } else {
            println!("{}", "✨ No build folders to delete!".green());
        }
        return Ok(());
    }

    // Without --yes there is no one to confirm in JSON mode, so it only lists
    if execution_options.dry_run || (json_mode && !execution_options.yes) {
        if json_mode {
            println!("{}", serde_json::to_string_pretty(&JsonOutput::from_listing(&projects))?);
        } else {
            println!(
                "\n{} {}",
                "🧪 Dry run complete!".yellow(),
                format!("Would free up {}", format_size(total_size, DECIMAL)).bright_white()
            );
        }
        return Ok(());
    }

    let selected = if execution_options.interactive {
        projects.interactive_selection()?
    } else {
        projects.folders()
    };

    if selected.is_empty() {
        println!("{}", "✨ No build folders selected!".green());
        return Ok(());
    }

    if !execution_options.yes && !execution_options.interactive {
        let confirmed = Confirm::new(&format!("Delete {} build folders?", selected.len()))
            .with_default(false)
            .prompt()?;

        if !confirmed {
            println!("{}", "Nothing deleted.".dimmed());
            return Ok(());
        }
    }

    let clean_result =
        Cleaner::clean_folders(&fs, selected, execution_options.use_trash, json_mode);

    // Refresh: the tree keeps no cache, so listing again reflects the deletions
    let roots = tree.list_roots(Some(dir.as_path()))?;
    let remaining = Projects::expand(&tree, &fs, roots).folder_count();

    if json_mode {
        let output = JsonOutput::from_cleanup(&projects, &clean_result, remaining);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        Cleaner::print_summary(&clean_result);
        println!(
            "  🔄 Build folders remaining: {}",
            remaining.to_string().bright_white()
        );
    }

    Ok(())
}

/// List the workspace with a spinner, reporting skipped directories in verbose mode.
///
/// # Panics
///
/// Panics if the hard-coded spinner template is invalid.
fn scan_workspace(
    tree: &SolutionTree<'_>,
    fs: &dyn FileSystem,
    dir: &Path,
    scan_options: &ScanOptions,
    json_mode: bool,
) -> Result<Projects> {
    let progress = if json_mode {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Scanning {} for solution files...", dir.display()));
        pb
    };

    let listing = tree.list_workspace(Some(dir))?;
    let projects = Projects::expand(tree, fs, listing.projects);

    progress.finish_with_message("✅ Workspace scan complete");

    if scan_options.verbose && !json_mode {
        for skipped in &listing.skipped {
            eprintln!(
                "{}",
                format!("Skipped {}: {}", skipped.path.display(), skipped.reason).red()
            );
        }
    }

    Ok(projects)
}

/// Delete one folder given on the command line and report the outcome.
fn delete_single(
    fs: &dyn FileSystem,
    parent: &Path,
    name: &str,
    use_trash: bool,
    json_mode: bool,
) -> Result<()> {
    let target: PathBuf = parent.join(name);
    let outcome = FolderShredder::new(fs).with_trash(use_trash).delete(parent, name);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonDeleteOutput::new(target, &outcome))?
        );
        if !outcome.succeeded {
            exit(1);
        }
        return Ok(());
    }

    outcome.into_result()?;
    println!("{} {}", "🗑️  Deleted".green(), target.display());

    Ok(())
}
