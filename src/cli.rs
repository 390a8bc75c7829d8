use std::path::PathBuf;

use clap::Parser;
use sln_shredder::{
    config::{ExecutionOptions, FileConfig, ScanOptions, file::expand_tilde},
    error::ShredError,
    host::HostKind,
};

#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
struct ExecutionArgs {
    /// Don't ask for confirmation; delete every build folder found
    #[arg(short = 'y', long)]
    yes: bool,

    /// Only list the build folders and the space they would free
    #[arg(long)]
    dry_run: bool,

    /// Pick the folders to delete from a list
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Delete permanently instead of moving folders to the trash
    #[arg(long)]
    permanent: bool,

    /// Print a single JSON document instead of human-readable output
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ScanningArgs {
    /// Report directories that could not be read while scanning
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Line ending and separator convention of the solution files [posix, windows]
    #[arg(long)]
    host: Option<String>,

    /// Folder name to treat as build output (repeatable; defaults to bin and obj)
    #[arg(long = "folder", action = clap::ArgAction::Append)]
    folders: Vec<String>,

    /// File suffix that marks a solution file, without the dot
    #[arg(long)]
    suffix: Option<String>,
}

#[derive(Parser)]
#[command(name = "sln-shredder")]
#[command(version)]
#[command(about = "List and remove bin/ and obj/ folders of projects declared in .sln files")]
pub(crate) struct Cli {
    /// The workspace directory to search for solution files
    dir: Option<PathBuf>,

    /// Delete a single build folder and exit
    #[arg(long, num_args = 2, value_names = ["PROJECT_DIR", "NAME"])]
    delete: Option<Vec<String>>,

    /// Execution options
    #[command(flatten)]
    execution: ExecutionArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    pub(crate) const fn json(&self) -> bool {
        self.execution.json
    }

    /// The workspace to scan: CLI argument, then config file, then the current directory.
    pub(crate) fn directory(&self, config: &FileConfig) -> PathBuf {
        self.dir
            .clone()
            .or_else(|| config.dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The `(project dir, folder name)` pair given to `--delete`.
    pub(crate) fn delete_target(&self) -> Option<(PathBuf, String)> {
        match self.delete.as_deref() {
            Some([parent, name]) => Some((PathBuf::from(parent), name.clone())),
            _ => None,
        }
    }

    pub(crate) fn execution_options(&self, config: &FileConfig) -> ExecutionOptions {
        let file = &config.execution;

        ExecutionOptions {
            dry_run: self.execution.dry_run || file.dry_run.unwrap_or(false),
            interactive: self.execution.interactive || file.interactive.unwrap_or(false),
            yes: self.execution.yes || file.yes.unwrap_or(false),
            use_trash: !self.execution.permanent && file.use_trash.unwrap_or(true),
        }
    }

    /// Resolve scanning options.
    ///
    /// The host convention comes from `--host`, then the config file, then the
    /// platform itself.
    pub(crate) fn scan_options(&self, config: &FileConfig) -> Result<ScanOptions, ShredError> {
        let host = match self.scanning.host.as_deref().or(config.host.as_deref()) {
            Some(name) => name.parse::<HostKind>()?,
            None => HostKind::detect()?,
        };

        let mut options = ScanOptions::for_host(host);
        options.verbose = self.scanning.verbose || config.scanning.verbose.unwrap_or(false);

        if self.scanning.folders.is_empty() {
            if let Some(folders) = &config.scanning.build_folders {
                options.build_folders.clone_from(folders);
            }
        } else {
            options.build_folders.clone_from(&self.scanning.folders);
        }

        if let Some(suffix) = self.scanning.suffix.as_ref().or(config.scanning.suffix.as_ref())
        {
            options.suffix.clone_from(suffix);
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sln-shredder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = parse(&[]);
        let config = FileConfig::default();

        assert_eq!(cli.directory(&config), PathBuf::from("."));
        assert!(cli.delete_target().is_none());
        assert!(!cli.json());

        let exec = cli.execution_options(&config);
        assert!(!exec.dry_run);
        assert!(exec.use_trash);

        let scan = cli.scan_options(&config).unwrap();
        assert_eq!(scan.build_folders, vec!["bin", "obj"]);
        assert_eq!(scan.suffix, "sln");
        assert_eq!(scan.host, HostKind::detect().unwrap());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&[
            "/work", "--host", "windows", "--folder", "out", "--permanent", "--dry-run",
            "--suffix", "slnx",
        ]);
        let config: FileConfig = toml::from_str(
            "dir = \"/elsewhere\"\nhost = \"posix\"\n[scanning]\nbuild_folders = [\"bin\"]\nsuffix = \"sln\"\n[execution]\nuse_trash = true\n",
        )
        .unwrap();

        assert_eq!(cli.directory(&config), PathBuf::from("/work"));

        let scan = cli.scan_options(&config).unwrap();
        assert_eq!(scan.host, HostKind::Windows);
        assert_eq!(scan.build_folders, vec!["out"]);
        assert_eq!(scan.suffix, "slnx");

        let exec = cli.execution_options(&config);
        assert!(exec.dry_run);
        assert!(!exec.use_trash);
    }

    #[test]
    fn test_config_fills_gaps() {
        let cli = parse(&[]);
        let config: FileConfig = toml::from_str(
            "dir = \"/from/config\"\nhost = \"posix\"\n[scanning]\nverbose = true\nbuild_folders = [\"bin\", \"TestResults\"]\nsuffix = \"slnx\"\n[execution]\nuse_trash = false\nyes = true\n",
        )
        .unwrap();

        assert_eq!(cli.directory(&config), PathBuf::from("/from/config"));

        let scan = cli.scan_options(&config).unwrap();
        assert!(scan.verbose);
        assert_eq!(scan.host, HostKind::Posix);
        assert_eq!(scan.build_folders, vec!["bin", "TestResults"]);
        assert_eq!(scan.suffix, "slnx");

        let exec = cli.execution_options(&config);
        assert!(exec.yes);
        assert!(!exec.use_trash);
    }

    #[test]
    fn test_unsupported_host_is_fatal() {
        let cli = parse(&["--host", "amiga"]);

        assert!(matches!(
            cli.scan_options(&FileConfig::default()),
            Err(ShredError::UnsupportedHostKind(_))
        ));
    }

    #[test]
    fn test_delete_takes_two_values() {
        let cli = parse(&["--delete", "/ws/App", "bin"]);
        assert_eq!(
            cli.delete_target(),
            Some((PathBuf::from("/ws/App"), "bin".to_string()))
        );

        assert!(
            Cli::try_parse_from(["sln-shredder", "--delete", "/ws/App"]).is_err()
        );
    }
}
