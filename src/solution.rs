//! Solution file parsing.
//!
//! A solution declares each of its projects on a single line:
//!
//! ```text
//! Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "App", "App\App.csproj", "{9A19103F-16F7-4668-BE54-9A1E7A4F7556}"
//! ```
//!
//! Older layouts only carry the name (`Project("{GUID}") = "App"`) and rely on
//! the project living in `<solution dir>/App`. Both shapes are recognized.
//! Everything else in the file (global sections, solution folders, other
//! project kinds) is ignored.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

use crate::{filesystem::FileSystem, host::HostKind};

/// Matches one project declaration and captures its GUID, name and optional path.
static PROJECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"Project\("\{(?P<guid>[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})\}"\)"#,
        r#"\s*=\s*"(?P<name>[^"]+)""#,
        r#"(?:\s*,\s*"(?P<path>[^"]*\.csproj)"\s*,\s*"\{[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\}"|\s*$)"#,
    ))
    .expect("project declaration pattern is a valid literal")
});

/// One project declared in a solution file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectIndexEntry {
    /// Project type GUID, without braces
    pub identifier: String,

    /// Display name of the project
    pub name: String,

    /// Path of the `.csproj` relative to the solution, rewritten for the host.
    ///
    /// `None` for name-only declarations.
    pub relative_path: Option<String>,
}

/// Extracts [`ProjectIndexEntry`] values from solution text.
#[derive(Clone, Copy, Debug)]
pub struct SolutionParser {
    host: HostKind,
}

impl SolutionParser {
    #[must_use]
    pub const fn new(host: HostKind) -> Self {
        Self { host }
    }

    /// Parse solution text into its project declarations, in file order.
    ///
    /// Lines are split on the host's line delimiter only. Lines that do not
    /// declare a project are skipped, so this never fails; input without any
    /// declaration yields an empty vector.
    #[must_use]
    pub fn parse(&self, contents: &str) -> Vec<ProjectIndexEntry> {
        contents
            .split(self.host.line_delimiter())
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    fn parse_line(&self, line: &str) -> Option<ProjectIndexEntry> {
        let captures = PROJECT_LINE.captures(line)?;

        Some(ProjectIndexEntry {
            identifier: captures["guid"].to_string(),
            name: captures["name"].to_string(),
            relative_path: captures
                .name("path")
                .map(|path| self.host.to_host_path(path.as_str())),
        })
    }

    /// Read and parse a solution file.
    ///
    /// A file that cannot be read is treated like an empty one.
    #[must_use]
    pub fn parse_file(&self, fs: &dyn FileSystem, path: &Path) -> Vec<ProjectIndexEntry> {
        fs.read_to_string(path)
            .map(|contents| self.parse(&contents))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFileSystem;

    const CSHARP: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";

    fn declaration(name: &str, path: &str, guid: &str) -> String {
        format!(r#"Project("{{{CSHARP}}}") = "{name}", "{path}", "{{{guid}}}""#)
    }

    #[test]
    fn test_parse_extracts_name_and_path() {
        let line = declaration(
            "App",
            "App\\App.csproj",
            "22222222-2222-2222-2222-222222222222",
        );

        let entries = SolutionParser::new(HostKind::Posix).parse(&line);

        assert_eq!(
            entries,
            vec![ProjectIndexEntry {
                identifier: CSHARP.to_string(),
                name: "App".to_string(),
                relative_path: Some("App/App.csproj".to_string()),
            }]
        );
    }

    #[test]
    fn test_parse_windows_host_keeps_backslashes() {
        let line = declaration(
            "Core",
            "src/Core/Core.csproj",
            "9A19103F-16F7-4668-BE54-9A1E7A4F7556",
        );

        let entries = SolutionParser::new(HostKind::Windows).parse(&line);

        assert_eq!(
            entries[0].relative_path.as_deref(),
            Some("src\\Core\\Core.csproj")
        );
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let contents = [
            "Microsoft Visual Studio Solution File, Format Version 12.00".to_string(),
            "# Visual Studio Version 17".to_string(),
            declaration("Web", "Web\\Web.csproj", "11111111-1111-1111-1111-111111111111"),
            "EndProject".to_string(),
            declaration("Api", "Api\\Api.csproj", "22222222-2222-2222-2222-222222222222"),
            "EndProject".to_string(),
            declaration(
                "Tests",
                "tests\\Tests\\Tests.csproj",
                "33333333-3333-3333-3333-333333333333",
            ),
            "EndProject".to_string(),
            "Global".to_string(),
            "EndGlobal".to_string(),
        ]
        .join("\n");

        let names: Vec<_> = SolutionParser::new(HostKind::Posix)
            .parse(&contents)
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, vec!["Web", "Api", "Tests"]);
    }

    #[test]
    fn test_parse_name_only_variant() {
        let contents = format!(r#"Project("{{{CSHARP}}}") = "Legacy""#);

        let entries = SolutionParser::new(HostKind::Posix).parse(&contents);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Legacy");
        assert_eq!(entries[0].relative_path, None);
    }

    #[test]
    fn test_parse_ignores_solution_folders() {
        // Solution folders reference themselves instead of a .csproj
        let contents = format!(
            r#"Project("{{2150E333-8FDC-42A3-9474-1A3956D46DE8}}") = "Solution Items", "Solution Items", "{{{CSHARP}}}""#
        );

        assert!(SolutionParser::new(HostKind::Posix).parse(&contents).is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_guid() {
        let contents = r#"Project("{1234-not-a-guid}") = "App", "App\App.csproj", "{22222222-2222-2222-2222-222222222222}""#;

        assert!(SolutionParser::new(HostKind::Posix).parse(contents).is_empty());
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let contents = format!(
            r#"Project("{{{CSHARP}}}") = "", "App\App.csproj", "{{22222222-2222-2222-2222-222222222222}}""#
        );

        assert!(SolutionParser::new(HostKind::Posix).parse(&contents).is_empty());
    }

    #[test]
    fn test_parse_without_declarations_is_empty() {
        let parser = SolutionParser::new(HostKind::Posix);

        assert!(parser.parse("").is_empty());
        assert!(parser.parse("Global\n\tGlobalSection\nEndGlobal\n").is_empty());
    }

    #[test]
    fn test_parse_crlf_file_on_windows_host() {
        let contents = format!(
            "{}\r\nEndProject\r\n{}\r\n",
            declaration("A", "A\\A.csproj", "11111111-1111-1111-1111-111111111111"),
            declaration("B", "B\\B.csproj", "22222222-2222-2222-2222-222222222222"),
        );

        let entries = SolutionParser::new(HostKind::Windows).parse(&contents);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].relative_path.as_deref(), Some("B\\B.csproj"));
    }

    #[test]
    fn test_parse_crlf_file_on_posix_host_tolerates_trailing_cr() {
        let contents = format!(
            "{}\r\nEndProject\r\n",
            declaration("A", "A\\A.csproj", "11111111-1111-1111-1111-111111111111"),
        );

        let entries = SolutionParser::new(HostKind::Posix).parse(&contents);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path.as_deref(), Some("A/A.csproj"));
    }

    #[test]
    fn test_parse_file_unreadable_is_empty() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/ws/App.sln", "irrelevant").deny("/ws/App.sln");

        let parser = SolutionParser::new(HostKind::Posix);

        assert!(parser.parse_file(&fs, Path::new("/ws/App.sln")).is_empty());
        assert!(parser.parse_file(&fs, Path::new("/ws/Missing.sln")).is_empty());
    }
}
