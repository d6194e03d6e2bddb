//! Module naming: `<scope><base>-<variant>`.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use glide_variant::VariantKey;

/// Scope the official packages are published under.
pub const DEFAULT_SCOPE: &str = "@valkey/";

/// Placeholder scope left in unconfigured packaging; treated as unset.
pub const SCOPE_SENTINEL: &str = "@scope";

/// Product family every variant package name starts with.
pub const BASE_NAME: &str = "valkey-glide";

/// Naming prefix for locating published module packages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope(String);

impl Scope {
    pub fn new(scope: impl Into<String>) -> Self { Self(scope.into()) }

    /// Pick the effective scope: the override when present and not the
    /// sentinel, `default` otherwise.
    pub fn resolve(overridden: Option<&str>, default: &str, sentinel: &str) -> Self {
        match overridden {
            Some(scope) if !scope.is_empty() && scope != sentinel => Self::new(scope),
            _ => Self::new(default),
        }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl Default for Scope {
    fn default() -> Self { Self::new(DEFAULT_SCOPE) }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Fully qualified name of one native module variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName {
    scope:   Scope,
    base:    String,
    variant: VariantKey,
}

impl ModuleName {
    pub fn new(scope: Scope, base: impl Into<String>, variant: VariantKey) -> Self {
        Self {
            scope,
            base: base.into(),
            variant,
        }
    }

    pub fn scope(&self) -> &Scope { &self.scope }

    pub fn base(&self) -> &str { &self.base }

    pub fn variant(&self) -> &VariantKey { &self.variant }

    /// Where the artifact lives relative to a search root.
    ///
    /// `/` in the name separates directories; the last segment becomes a
    /// platform library file name, so `@valkey/valkey-glide-linux-x64` maps
    /// to `@valkey/libvalkey-glide-linux-x64.so` on Linux.
    pub fn relative_path(&self) -> PathBuf {
        let full = self.to_string();
        let mut segments: Vec<&str> = full
            .split('/')
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect();

        let file = segments.pop().unwrap_or_default();
        let mut path: PathBuf = segments.into_iter().collect();
        path.push(library_file_name(file));
        path
    }

    /// Flat library file name handed to the system loader.
    ///
    /// The whole name is kept so that scopes stay distinct without a
    /// directory layout: `@corp/valkey-glide-linux-x64` becomes
    /// `libcorp-valkey-glide-linux-x64.so` on Linux.
    pub fn system_file_name(&self) -> OsString {
        let full = self.to_string();
        let stem = full
            .split('/')
            .map(|s| s.trim_start_matches('@'))
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .collect::<Vec<_>>()
            .join("-");
        library_file_name(&stem)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.scope, self.base, self.variant)
    }
}

fn library_file_name(stem: &str) -> OsString { libloading::library_filename(stem) }
