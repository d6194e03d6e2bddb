//! Architecture detection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arch {
    X86,
    X86_64,
    Arm,
    Arm64,
    Unknown,
}

impl Arch {
    /// Parse a machine name as reported by `uname -m`, Rust or Node.
    pub fn from_machine(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "i386" | "i586" | "i686" | "x86" | "ia32" => Self::X86,
            "x86_64" | "amd64" | "x64" => Self::X86_64,
            "arm" | "armv6l" | "armv7l" | "armv7" => Self::Arm,
            "aarch64" | "arm64" | "armv8l" => Self::Arm64,
            _ => Self::Unknown,
        }
    }

    /// Architecture token used in variant keys and diagnostics.
    pub fn token(&self) -> &'static str {
        match self {
            Self::X86 => "ia32",
            Self::X86_64 => "x64",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.token()) }
}

impl FromStr for Arch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_machine(s) {
            Self::Unknown => Err(Error::UnknownArch(s.to_string())),
            arch => Ok(arch),
        }
    }
}

/// Detect the architecture of the running process.
///
/// This is the compile target, not the kernel: a 32-bit userland on a 64-bit
/// kernel must load 32-bit modules.
pub fn detect() -> Arch { Arch::from_machine(std::env::consts::ARCH) }

/// Machine name reported by the kernel, for diagnostics only.
pub fn kernel_machine() -> String { sysinfo::System::cpu_arch() }
