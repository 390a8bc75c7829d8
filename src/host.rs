//! Host conventions for line endings and path separators.
//!
//! Solution files written on one platform are read on another, so every path
//! pulled out of a solution is rewritten to the separator of the host that is
//! going to open it. Only two conventions are supported; anything else is
//! rejected up front rather than guessed at.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::ShredError;

/// A supported host convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// `\n` line endings and `/` separators.
    Posix,

    /// `\r\n` line endings and `\` separators.
    Windows,
}

impl HostKind {
    /// Detect the convention of the platform this binary was compiled for.
    ///
    /// # Errors
    ///
    /// Returns [`ShredError::UnsupportedHostKind`] on targets that are neither
    /// unix-like nor windows.
    pub fn detect() -> Result<Self, ShredError> {
        if cfg!(windows) {
            Ok(Self::Windows)
        } else if cfg!(unix) {
            Ok(Self::Posix)
        } else {
            Err(ShredError::UnsupportedHostKind(
                std::env::consts::OS.to_string(),
            ))
        }
    }

    /// The line delimiter solution files are expected to use on this host.
    #[must_use]
    pub const fn line_delimiter(self) -> &'static str {
        match self {
            Self::Posix => "\n",
            Self::Windows => "\r\n",
        }
    }

    /// The path separator of this host.
    #[must_use]
    pub const fn path_separator(self) -> &'static str {
        match self {
            Self::Posix => "/",
            Self::Windows => "\\",
        }
    }

    const fn foreign_separator(self) -> char {
        match self {
            Self::Posix => '\\',
            Self::Windows => '/',
        }
    }

    /// Rewrite every separator of the other convention to this host's separator.
    ///
    /// Idempotent, and the identity on paths that already use only the host
    /// separator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sln_shredder::host::HostKind;
    /// assert_eq!(HostKind::Posix.to_host_path("App\\App.csproj"), "App/App.csproj");
    /// assert_eq!(HostKind::Windows.to_host_path("App/App.csproj"), "App\\App.csproj");
    /// ```
    #[must_use]
    pub fn to_host_path(self, raw: &str) -> String {
        raw.replace(self.foreign_separator(), self.path_separator())
    }
}

impl FromStr for HostKind {
    type Err = ShredError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "unix" | "linux" | "macos" | "darwin" => Ok(Self::Posix),
            "windows" | "win32" => Ok(Self::Windows),
            _ => Err(ShredError::UnsupportedHostKind(s.to_string())),
        }
    }
}

impl Display for HostKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
