//! Variant resolution.
//!
//! Turns a [`PlatformDescriptor`] into the [`VariantKey`] of the native
//! module build that runs on it:
//!
//! | OS     | arch  | libc            | key                |
//! |--------|-------|-----------------|--------------------|
//! | linux  | x64   | glibc           | `linux-x64`        |
//! | linux  | x64   | musl            | `linux-musl-x64`   |
//! | linux  | arm64 | glibc           | `linux-arm64`      |
//! | linux  | arm64 | musl            | `linux-musl-arm64` |
//! | darwin | x64   |                 | `darwin-x64`       |
//! | darwin | arm64 |                 | `darwin-arm64`     |
//!
//! A variant override bypasses the table entirely. An unknown libc on Linux
//! is settled by [`LibcPolicy`].
//!
//! Resolution is a pure function of its inputs.

pub use error::{ResolveError, Result};
pub use key::VariantKey;
pub use overrides::{Overrides, SCOPE_ENV, VARIANT_ENV};
pub use policy::LibcPolicy;
pub use table::{LibcMatch, VARIANT_TABLE, VariantRule, lookup, supported_variants, supports};

mod error;
mod key;
mod overrides;
mod policy;
mod table;

use glide_platform::{Libc, OsFamily, PlatformDescriptor};

/// Resolve the variant key for `descriptor`, honouring a forced variant in
/// `overrides`.
pub fn resolve(
    descriptor: &PlatformDescriptor,
    overrides: &Overrides,
    policy: LibcPolicy,
) -> Result<VariantKey> {
    if let Some(variant) = overrides.get_variant() {
        tracing::info!(variant, %descriptor, "using overridden native variant");
        return Ok(VariantKey::from(variant));
    }

    resolve_platform(descriptor, policy)
}

/// Resolve from the variant table only.
pub fn resolve_platform(descriptor: &PlatformDescriptor, policy: LibcPolicy) -> Result<VariantKey> {
    let PlatformDescriptor { os, arch, libc } = *descriptor;

    if !supports(os, arch) {
        return Err(ResolveError::UnsupportedPlatform { os, arch });
    }

    let libc = match (os, libc) {
        (OsFamily::Linux, Libc::Unknown) => match policy {
            LibcPolicy::AssumeGlibc => Libc::Glibc,
            LibcPolicy::AssumeMusl => Libc::Musl,
            LibcPolicy::Reject => return Err(ResolveError::UnknownLibc { arch, libc }),
        },
        (_, libc) => libc,
    };

    let rule = lookup(os, arch, libc).ok_or(ResolveError::UnsupportedPlatform { os, arch })?;

    tracing::debug!(%descriptor, variant = rule.key, "resolved native variant");
    Ok(VariantKey::from(rule.key))
}
