//! Externally supplied overrides for non-standard deployments.

use std::ffi::OsString;

/// Environment variable that forces a variant key.
pub const VARIANT_ENV: &str = "native_binding";

/// Environment variable that forces the package scope.
pub const SCOPE_ENV: &str = "scope";

/// Forced variant and scope. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    variant: Option<String>,
    scope:   Option<String>,
}

impl Overrides {
    pub fn new() -> Self { Self::default() }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Read overrides from [`VARIANT_ENV`] and [`SCOPE_ENV`].
    pub fn from_env() -> Self { Self::from_env_vars(VARIANT_ENV, SCOPE_ENV) }

    /// Read overrides from the named environment variables.
    pub fn from_env_vars(variant_var: &str, scope_var: &str) -> Self {
        Self::from_lookup(variant_var, scope_var, env_lossy)
    }

    /// Read overrides through an arbitrary lookup function.
    pub fn from_lookup<F>(variant_var: &str, scope_var: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            variant: lookup(variant_var),
            scope:   lookup(scope_var),
        }
    }

    /// The forced variant key, if set and non-empty.
    pub fn get_variant(&self) -> Option<&str> { self.variant.as_deref().filter(|v| !v.is_empty()) }

    /// The forced scope, if set and non-empty. Sentinel handling is left to
    /// the loader.
    pub fn get_scope(&self) -> Option<&str> { self.scope.as_deref().filter(|s| !s.is_empty()) }
}

/// Read `name`, replacing invalid UTF-8 rather than dropping the value.
fn env_lossy(name: &str) -> Option<String> {
    let value = std::env::var_os(name)?;
    Some(decode_lossy(name, value))
}

fn decode_lossy(name: &str, value: OsString) -> String {
    value.into_string().unwrap_or_else(|raw| {
        let lossy = raw.to_string_lossy().into_owned();
        tracing::warn!(var = name, value = %lossy, "override is not valid UTF-8, using lossy conversion");
        lossy
    })
}
