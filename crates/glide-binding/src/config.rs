//! Binding configuration.
//!
//! Layers, lowest precedence first: built-in defaults, a TOML file, then
//! `GLIDE_`-prefixed environment variables (`GLIDE_DEFAULT_SCOPE`,
//! `GLIDE_LIBC_POLICY`, `GLIDE_SEARCH_PATHS=[a, b]`, ...).

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use glide_loader::{BASE_NAME, DEFAULT_SCOPE, DynamicSource, SCOPE_SENTINEL, Scope};
use glide_namespace::PublishPolicy;
use glide_variant::{LibcPolicy, Overrides, SCOPE_ENV, VARIANT_ENV};
use serde::Deserialize;

use crate::error::ConfigError;

/// File read by [`BindingConfig::load`] from the working directory.
pub const CONFIG_FILE: &str = "glide-binding.toml";

/// Prefix of environment variables that override configuration fields.
pub const ENV_PREFIX: &str = "GLIDE_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Product family prefix of every variant package.
    pub base_name:      String,
    /// Scope used when none is forced.
    pub default_scope:  String,
    /// Forced scope value that means "not forced".
    pub scope_sentinel: String,
    /// Environment variable holding a forced variant key.
    pub variant_env:    String,
    /// Environment variable holding a forced scope.
    pub scope_env:      String,
    /// Roots probed before the default search roots.
    pub search_paths:   Vec<PathBuf>,
    /// Fall back to the system loader's search rules.
    pub system_search:  bool,
    pub libc_policy:    LibcPolicy,
    pub publish_policy: PublishPolicy,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            base_name:      BASE_NAME.to_string(),
            default_scope:  DEFAULT_SCOPE.to_string(),
            scope_sentinel: SCOPE_SENTINEL.to_string(),
            variant_env:    VARIANT_ENV.to_string(),
            scope_env:      SCOPE_ENV.to_string(),
            search_paths:   Vec::new(),
            system_search:  true,
            libc_policy:    LibcPolicy::default(),
            publish_policy: PublishPolicy::default(),
        }
    }
}

impl BindingConfig {
    pub fn new() -> Self { Self::default() }

    /// Load from [`CONFIG_FILE`] (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> { Self::load_from(CONFIG_FILE) }

    /// Load from `path` (if present) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path.as_ref()).extract()?;
        tracing::debug!(?config, "loaded binding configuration");
        Ok(config)
    }

    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn default_scope(mut self, scope: impl Into<String>) -> Self {
        self.default_scope = scope.into();
        self
    }

    pub fn search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    pub fn system_search(mut self, enabled: bool) -> Self {
        self.system_search = enabled;
        self
    }

    pub fn libc_policy(mut self, policy: LibcPolicy) -> Self {
        self.libc_policy = policy;
        self
    }

    pub fn publish_policy(mut self, policy: PublishPolicy) -> Self {
        self.publish_policy = policy;
        self
    }

    /// Overrides read from the configured environment variables.
    pub fn overrides(&self) -> Overrides { Overrides::from_env_vars(&self.variant_env, &self.scope_env) }

    /// Effective scope given `overrides`.
    pub fn scope(&self, overrides: &Overrides) -> Scope {
        Scope::resolve(overrides.get_scope(), &self.default_scope, &self.scope_sentinel)
    }

    /// Host loader probing the configured roots, then the default ones.
    pub fn module_source(&self) -> DynamicSource {
        let mut source = DynamicSource::new().system_search(self.system_search);
        for path in &self.search_paths {
            source = source.search_path(path.clone());
        }
        for path in DynamicSource::with_default_paths().search_paths() {
            source = source.search_path(path.clone());
        }
        source
    }
}
