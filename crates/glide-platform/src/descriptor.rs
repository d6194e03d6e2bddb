use std::fmt;

use once_cell::sync::Lazy;

use crate::{Arch, Libc, OsFamily, arch, libc, os};

static HOST: Lazy<PlatformDescriptor> = Lazy::new(PlatformDescriptor::probe);

/// Host facts that decide which native variant can be loaded.
///
/// `libc` is only meaningful on Linux and is always [`Libc::Unknown`]
/// elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformDescriptor {
    pub os:   OsFamily,
    pub arch: Arch,
    pub libc: Libc,
}

impl PlatformDescriptor {
    pub fn new(os: OsFamily, arch: Arch, libc: Libc) -> Self {
        let libc = if os == OsFamily::Linux { libc } else { Libc::Unknown };
        Self { os, arch, libc }
    }

    /// Descriptor of the running host, computed once per process.
    pub fn detect() -> Self { *HOST }

    fn probe() -> Self {
        let os = os::detect();
        let arch = arch::detect();
        let libc = if os == OsFamily::Linux { libc::detect() } else { Libc::Unknown };

        let descriptor = Self::new(os, arch, libc);
        let kernel = arch::kernel_machine();
        if Arch::from_machine(&kernel) != arch {
            tracing::debug!(%descriptor, %kernel, "process architecture differs from kernel");
        }
        tracing::debug!(%descriptor, "detected host platform");
        descriptor
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)?;
        if self.os == OsFamily::Linux {
            write!(f, "/{}", self.libc)?;
        }
        Ok(())
    }
}
