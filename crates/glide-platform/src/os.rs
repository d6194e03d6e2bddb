//! Operating system family detection.

use std::fmt;
use std::str::FromStr;

use sysinfo::System;

use crate::error::Error;

/// Operating system families a native variant can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OsFamily {
    Linux,
    Macos,
    Windows,
    FreeBsd,
    Unknown,
}

impl OsFamily {
    /// Parse an OS name.
    ///
    /// Accepts Rust target names (`linux`, `macos`) as well as the Node
    /// platform tokens (`darwin`, `win32`) used in published variant names.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Self::Linux,
            "macos" | "darwin" | "mac os x" | "osx" => Self::Macos,
            "windows" | "win32" => Self::Windows,
            "freebsd" => Self::FreeBsd,
            _ => Self::Unknown,
        }
    }

    /// Platform token used in variant keys and diagnostics.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Macos => "darwin",
            Self::Windows => "win32",
            Self::FreeBsd => "freebsd",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.token()) }
}

impl FromStr for OsFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_name(s) {
            Self::Unknown => Err(Error::UnknownOs(s.to_string())),
            os => Ok(os),
        }
    }
}

/// Detect the operating system family of the running process.
pub fn detect() -> OsFamily { OsFamily::from_name(std::env::consts::OS) }

/// Linux distribution id (`ID=` in os-release), lowercased.
/// Empty when the host does not report one.
pub fn distribution_id() -> String { System::distribution_id().to_ascii_lowercase() }
