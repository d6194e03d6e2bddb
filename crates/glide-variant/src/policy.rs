use serde::Deserialize;

/// What to do when a Linux host's C runtime could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibcPolicy {
    /// Pick the glibc variant. Most Linux hosts run glibc.
    #[default]
    AssumeGlibc,
    /// Pick the musl variant.
    AssumeMusl,
    /// Fail resolution with [`ResolveError::UnknownLibc`](crate::ResolveError::UnknownLibc).
    Reject,
}
