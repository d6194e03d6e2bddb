use glide_loader::{ModuleName, ModuleSource, Symbol, load_module};
use glide_namespace::{ExpectedSymbolSet, PublishedNamespace, publish};
use glide_platform::PlatformDescriptor;
use glide_variant::{Overrides, VariantKey, resolve};

use crate::config::BindingConfig;
use crate::error::{InitError, Result};

/// A fully resolved, loaded and published native binding.
#[derive(Debug)]
pub struct Binding {
    descriptor: PlatformDescriptor,
    variant:    VariantKey,
    module:     ModuleName,
    namespace:  PublishedNamespace,
}

impl Binding {
    pub fn descriptor(&self) -> &PlatformDescriptor { &self.descriptor }

    pub fn variant(&self) -> &VariantKey { &self.variant }

    pub fn module(&self) -> &ModuleName { &self.module }

    pub fn namespace(&self) -> &PublishedNamespace { &self.namespace }

    /// Exported surface symbol `name`.
    pub fn get(&self, name: &str) -> Option<Symbol> { self.namespace.get(name) }
}

/// Initialise against the running host: detected platform, environment
/// overrides and the host dynamic loader.
pub fn initialize(config: &BindingConfig) -> Result<Binding> {
    let descriptor = PlatformDescriptor::detect();
    let overrides = config.overrides();
    let source = config.module_source();
    initialize_with(descriptor, &overrides, &source, config)
}

/// Like [`initialize`], reading the configuration through
/// [`BindingConfig::load`] first.
pub fn initialize_from_env() -> Result<Binding> {
    let config = BindingConfig::load()?;
    initialize(&config)
}

/// Run resolve → load → publish with explicit inputs.
pub fn initialize_with<S>(
    descriptor: PlatformDescriptor,
    overrides: &Overrides,
    source: &S,
    config: &BindingConfig,
) -> Result<Binding>
where
    S: ModuleSource + ?Sized,
{
    let span = tracing::info_span!("native_binding", %descriptor);
    let _enter = span.enter();

    let variant = resolve(&descriptor, overrides, config.libc_policy).map_err(|source| InitError::Resolve {
        source,
        override_var: config.variant_env.clone(),
    })?;

    let module = ModuleName::new(config.scope(overrides), config.base_name.clone(), variant.clone());
    let table = load_module(source, &module)?;
    let namespace = publish(table, &ExpectedSymbolSet::current(), config.publish_policy)?;

    tracing::info!(
        module = %module,
        complete = namespace.is_complete(),
        "native binding initialised"
    );

    Ok(Binding {
        descriptor,
        variant,
        module,
        namespace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_loader::{FixtureSource, fabricate};
    use glide_namespace::{EXPECTED_SYMBOLS, PublishPolicy};
    use glide_platform::{Arch, Libc, OsFamily};
    use glide_variant::LibcPolicy;

    fn linux_x64() -> PlatformDescriptor { PlatformDescriptor::new(OsFamily::Linux, Arch::X86_64, Libc::Glibc) }

    #[test]
    fn test_resolve_error_names_override_var() {
        let descriptor = PlatformDescriptor::new(OsFamily::Windows, Arch::X86_64, Libc::Unknown);
        let err = initialize_with(descriptor, &Overrides::new(), &FixtureSource::new(), &BindingConfig::default())
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "unsupported OS: win32, architecture: x64; set `native_binding` to force a native variant"
        );
    }

    #[test]
    fn test_unknown_libc_reject_policy() {
        let descriptor = PlatformDescriptor::new(OsFamily::Linux, Arch::X86_64, Libc::Unknown);
        let source = FixtureSource::new().with_variant("linux-x64", fabricate(EXPECTED_SYMBOLS.iter().copied()));

        let config = BindingConfig::default().libc_policy(LibcPolicy::Reject);
        let err = initialize_with(descriptor, &Overrides::new(), &source, &config).unwrap_err();
        assert!(matches!(err, InitError::Resolve { .. }));
        assert!(source.attempts().is_empty());

        let binding = initialize_with(descriptor, &Overrides::new(), &source, &BindingConfig::default()).unwrap();
        assert_eq!(binding.variant(), &VariantKey::from("linux-x64"));
    }

    #[test]
    fn test_strict_publish_surfaces_validation_error() {
        let source = FixtureSource::new().with_variant("linux-x64", fabricate(["GlideClient"]));
        let config = BindingConfig::default().publish_policy(PublishPolicy::Strict);

        let err = initialize_with(linux_x64(), &Overrides::new(), &source, &config).unwrap_err();
        assert!(matches!(err, InitError::Validate(_)));
    }

    #[test]
    fn test_invalid_config_is_init_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(crate::CONFIG_FILE, r#"publish_policy = "sometimes""#)?;
            let err = initialize_from_env().unwrap_err();
            assert!(matches!(err, InitError::Config(_)), "unexpected error: {err}");
            assert!(err.to_string().starts_with("invalid binding configuration"));
            Ok(())
        });
    }

    #[test]
    fn test_valid_config_reaches_loader() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(crate::CONFIG_FILE, "system_search = false")?;
            jail.set_env("GLIDE_BASE_NAME", "glide-test-absent");
            if let Err(err) = initialize_from_env() {
                assert!(!matches!(err, InitError::Config(_)), "unexpected error: {err}");
            }
            Ok(())
        });
    }

    #[test]
    fn test_custom_base_name() {
        let source = FixtureSource::new().with_module("@valkey/glide-ffi-linux-x64", fabricate(["GlideClient"]));
        let config = BindingConfig::default().base_name("glide-ffi");

        let binding = initialize_with(linux_x64(), &Overrides::new(), &source, &config).unwrap();
        assert_eq!(binding.module().to_string(), "@valkey/glide-ffi-linux-x64");
        assert!(binding.get("GlideClient").is_some());
        assert!(binding.get("Logger").is_none());
    }
}
