//! The supported variant matrix.

use glide_platform::{Arch, Libc, OsFamily};

/// Libc constraint of a variant rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibcMatch {
    /// Libc is irrelevant for this OS.
    Any,
    Glibc,
    Musl,
}

impl LibcMatch {
    fn matches(&self, libc: Libc) -> bool {
        match self {
            Self::Any => true,
            Self::Glibc => libc == Libc::Glibc,
            Self::Musl => libc == Libc::Musl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRule {
    pub os:   OsFamily,
    pub arch: Arch,
    pub libc: LibcMatch,
    pub key:  &'static str,
}

const fn rule(os: OsFamily, arch: Arch, libc: LibcMatch, key: &'static str) -> VariantRule {
    VariantRule { os, arch, libc, key }
}

/// Every published variant. A (os, arch, libc) tuple not covered here has no
/// variant and resolves to an error.
pub const VARIANT_TABLE: &[VariantRule] = &[
    rule(OsFamily::Linux, Arch::X86_64, LibcMatch::Glibc, "linux-x64"),
    rule(OsFamily::Linux, Arch::X86_64, LibcMatch::Musl, "linux-musl-x64"),
    rule(OsFamily::Linux, Arch::Arm64, LibcMatch::Glibc, "linux-arm64"),
    rule(OsFamily::Linux, Arch::Arm64, LibcMatch::Musl, "linux-musl-arm64"),
    rule(OsFamily::Macos, Arch::X86_64, LibcMatch::Any, "darwin-x64"),
    rule(OsFamily::Macos, Arch::Arm64, LibcMatch::Any, "darwin-arm64"),
];

/// Keys of every published variant, in table order.
pub fn supported_variants() -> impl Iterator<Item = &'static str> {
    VARIANT_TABLE.iter().map(|rule| rule.key)
}

/// Whether any variant is published for this OS and architecture.
pub fn supports(os: OsFamily, arch: Arch) -> bool {
    VARIANT_TABLE.iter().any(|rule| rule.os == os && rule.arch == arch)
}

/// Look up the variant for a fully determined tuple.
pub fn lookup(os: OsFamily, arch: Arch, libc: Libc) -> Option<&'static VariantRule> {
    VARIANT_TABLE
        .iter()
        .find(|rule| rule.os == os && rule.arch == arch && rule.libc.matches(libc))
}
