//! Process-wide binding with an init-once lifecycle.
//!
//! The first successful initialisation is kept for the life of the process.
//! Later calls return it without resolving, loading or merging again. A
//! failed initialisation leaves the registry empty.

use glide_loader::{ModuleSource, Symbol};
use glide_platform::PlatformDescriptor;
use glide_variant::Overrides;
use once_cell::sync::OnceCell;

use crate::binding::{Binding, initialize, initialize_from_env, initialize_with};
use crate::config::BindingConfig;
use crate::error::Result;

static GLOBAL: OnceCell<Binding> = OnceCell::new();

/// Initialise the process-wide binding against the running host, or return
/// the existing one.
pub fn init_global(config: &BindingConfig) -> Result<&'static Binding> {
    GLOBAL.get_or_try_init(|| initialize(config))
}

/// Like [`init_global`], loading the configuration only when the registry
/// is still empty.
pub fn init_global_from_env() -> Result<&'static Binding> { GLOBAL.get_or_try_init(initialize_from_env) }

/// Like [`init_global`] with explicit inputs.
pub fn init_global_with<S>(
    descriptor: PlatformDescriptor,
    overrides: &Overrides,
    source: &S,
    config: &BindingConfig,
) -> Result<&'static Binding>
where
    S: ModuleSource + ?Sized,
{
    GLOBAL.get_or_try_init(|| initialize_with(descriptor, overrides, source, config))
}

/// The process-wide binding, if initialised.
pub fn global() -> Option<&'static Binding> { GLOBAL.get() }

/// Any name the native module exported, surface or not.
pub fn lookup_global(name: &str) -> Option<Symbol> { global()?.namespace().globals().get(name).copied() }
