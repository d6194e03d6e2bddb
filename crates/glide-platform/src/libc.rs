//! C runtime family detection (Linux only).
//!
//! Probes run in order and the first conclusive answer wins:
//! the `ldd` script, the dynamic loader files under `/lib`, the
//! distribution id, and finally the runtime this binary was built for.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

const LDD_PATH: &str = "/usr/bin/ldd";
const LOADER_DIR: &str = "/lib";

/// C runtime family of a Linux host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Libc {
    Glibc,
    Musl,
    Unknown,
}

impl Libc {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Glibc => "glibc",
            Self::Musl => "musl",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Libc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.token()) }
}

impl FromStr for Libc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glibc" | "gnu" => Ok(Self::Glibc),
            "musl" => Ok(Self::Musl),
            _ => Err(Error::UnknownLibc(s.to_string())),
        }
    }
}

/// Classify the contents of the `ldd` launcher script.
pub fn from_ldd_contents(contents: &str) -> Libc {
    if contents.contains("musl") {
        Libc::Musl
    } else if contents.contains("GNU C Library") || contents.contains("GLIBC") {
        Libc::Glibc
    } else {
        Libc::Unknown
    }
}

/// Classify by the dynamic loader file names found in a library directory.
pub fn from_loader_names<I, S>(names: I) -> Libc
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = Libc::Unknown;
    for name in names {
        let name = name.as_ref();
        if name.starts_with("ld-musl-") {
            return Libc::Musl;
        }
        if name.starts_with("ld-linux") {
            found = Libc::Glibc;
        }
    }
    found
}

/// Classify by distribution id. Only distributions that ship musl as the
/// system C library are conclusive.
pub fn from_distribution_id(id: &str) -> Libc {
    match id {
        "alpine" | "postmarketos" | "chimera" | "void-musl" => Libc::Musl,
        _ => Libc::Unknown,
    }
}

/// The C runtime this binary was compiled against.
pub fn compiled() -> Libc {
    if cfg!(target_env = "musl") {
        Libc::Musl
    } else if cfg!(all(target_os = "linux", target_env = "gnu")) {
        Libc::Glibc
    } else {
        Libc::Unknown
    }
}

fn probe_ldd(path: &Path) -> Libc {
    fs::read(path)
        .map(|bytes| from_ldd_contents(&String::from_utf8_lossy(&bytes)))
        .unwrap_or(Libc::Unknown)
}

fn probe_loader_dir(dir: &Path) -> Libc {
    let Ok(entries) = fs::read_dir(dir) else {
        return Libc::Unknown;
    };
    from_loader_names(
        entries
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned()),
    )
}

/// Detect the C runtime family of the host.
pub fn detect() -> Libc {
    let probes: [(&str, fn() -> Libc); 4] = [
        ("ldd", || probe_ldd(Path::new(LDD_PATH))),
        ("loader", || probe_loader_dir(Path::new(LOADER_DIR))),
        ("distribution", || from_distribution_id(&crate::os::distribution_id())),
        ("compiled", compiled),
    ];

    for (source, probe) in probes {
        let libc = probe();
        if libc != Libc::Unknown {
            tracing::debug!(%libc, source, "detected libc family");
            return libc;
        }
    }

    tracing::debug!("libc family undetermined");
    Libc::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ldd_contents() {
        assert_eq!(from_ldd_contents("#!/bin/sh\nexec /lib/ld-musl-x86_64.so.1 --list \"$@\""), Libc::Musl);
        assert_eq!(
            from_ldd_contents("# This file is part of the GNU C Library.\nRTLDLIST=..."),
            Libc::Glibc
        );
        assert_eq!(from_ldd_contents("#!/bin/sh\necho hi"), Libc::Unknown);
    }

    #[test]
    fn test_loader_names() {
        assert_eq!(from_loader_names(["libc.so.6", "ld-linux-x86-64.so.2"]), Libc::Glibc);
        assert_eq!(from_loader_names(["ld-musl-aarch64.so.1"]), Libc::Musl);
        assert_eq!(from_loader_names(["ld-linux-aarch64.so.1", "ld-musl-aarch64.so.1"]), Libc::Musl);
        assert_eq!(from_loader_names(Vec::<String>::new()), Libc::Unknown);
    }

    #[test]
    fn test_distribution_id() {
        assert_eq!(from_distribution_id("alpine"), Libc::Musl);
        assert_eq!(from_distribution_id("ubuntu"), Libc::Unknown);
    }

    #[test]
    fn test_probe_missing_paths() {
        assert_eq!(probe_ldd(Path::new("/definitely/not/here/ldd")), Libc::Unknown);
        assert_eq!(probe_loader_dir(Path::new("/definitely/not/here")), Libc::Unknown);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("musl".parse::<Libc>(), Ok(Libc::Musl));
        assert_eq!("gnu".parse::<Libc>(), Ok(Libc::Glibc));
        assert!("bionic".parse::<Libc>().is_err());
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn test_compiled_gnu() {
        assert_eq!(compiled(), Libc::Glibc);
    }
}
