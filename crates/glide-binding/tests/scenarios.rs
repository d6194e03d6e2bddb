use glide_binding::{BindingConfig, InitError, initialize_with};
use glide_loader::{FixtureSource, LoadError, SymbolTable, fabricate};
use glide_namespace::{EXPECTED_SYMBOLS, PublishPolicy};
use glide_platform::{Arch, Libc, OsFamily, PlatformDescriptor};
use glide_variant::{Overrides, ResolveError};

fn full_surface() -> SymbolTable { fabricate(EXPECTED_SYMBOLS.iter().copied().chain(["InternalOnly"])) }

#[test]
fn test_linux_x64_glibc_loads_default_scope() {
    let source = FixtureSource::new().with_module("@valkey/valkey-glide-linux-x64", full_surface());
    let host = PlatformDescriptor::new(OsFamily::Linux, Arch::X86_64, Libc::Glibc);
    let config = BindingConfig::default().publish_policy(PublishPolicy::Strict);

    let binding = initialize_with(host, &Overrides::new(), &source, &config).unwrap();

    assert_eq!(source.attempts(), ["@valkey/valkey-glide-linux-x64"]);
    assert_eq!(binding.variant().as_str(), "linux-x64");
    assert!(binding.namespace().is_complete());
    for name in EXPECTED_SYMBOLS {
        assert!(binding.get(name).is_some(), "{name} not published");
    }
    assert!(binding.get("InternalOnly").is_none());
    assert!(binding.namespace().globals().contains("InternalOnly"));
}

#[test]
fn test_linux_arm64_musl_selects_musl_variant() {
    let source = FixtureSource::new().with_variant("linux-musl-arm64", full_surface());
    let host = PlatformDescriptor::new(OsFamily::Linux, Arch::Arm64, Libc::Musl);

    let binding = initialize_with(host, &Overrides::new(), &source, &BindingConfig::default()).unwrap();

    assert_eq!(binding.variant().as_str(), "linux-musl-arm64");
    assert_eq!(source.attempts(), ["@valkey/valkey-glide-linux-musl-arm64"]);
}

#[test]
fn test_unsupported_os_fails_before_loading() {
    let source = FixtureSource::new().with_variant("linux-x64", full_surface());
    let host = PlatformDescriptor::new(OsFamily::Windows, Arch::X86_64, Libc::Unknown);

    let err = initialize_with(host, &Overrides::new(), &source, &BindingConfig::default()).unwrap_err();

    match err {
        InitError::Resolve { source: resolve, .. } => assert_eq!(
            resolve,
            ResolveError::UnsupportedPlatform {
                os:   OsFamily::Windows,
                arch: Arch::X86_64,
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert!(source.attempts().is_empty());
}

#[test]
fn test_variant_override_bypasses_platform_check() {
    let source = FixtureSource::new().with_variant("custom-build-7", full_surface());
    let host = PlatformDescriptor::new(OsFamily::Windows, Arch::X86, Libc::Unknown);
    let overrides = Overrides::new().variant("custom-build-7");

    let binding = initialize_with(host, &overrides, &source, &BindingConfig::default()).unwrap();

    assert_eq!(binding.variant().as_str(), "custom-build-7");
    assert_eq!(source.attempts(), ["@valkey/valkey-glide-custom-build-7"]);
}

#[test]
fn test_scope_override_changes_module_name() {
    let source = FixtureSource::new().with_module("@fork/valkey-glide-darwin-arm64", full_surface());
    let host = PlatformDescriptor::new(OsFamily::Macos, Arch::Arm64, Libc::Unknown);

    let binding =
        initialize_with(host, &Overrides::new().scope("@fork/"), &source, &BindingConfig::default()).unwrap();
    assert_eq!(binding.module().to_string(), "@fork/valkey-glide-darwin-arm64");

    let err = initialize_with(host, &Overrides::new().scope("@scope"), &source, &BindingConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("@valkey/valkey-glide-darwin-arm64"));
}

#[test]
fn test_missing_module_reports_attempted_name() {
    let source = FixtureSource::new();
    let host = PlatformDescriptor::new(OsFamily::Linux, Arch::X86_64, Libc::Glibc);

    let err = initialize_with(host, &Overrides::new(), &source, &BindingConfig::default()).unwrap_err();

    assert!(matches!(&err, InitError::Load(LoadError::NotFound { module, .. }) if module == "@valkey/valkey-glide-linux-x64"));
    assert!(err.to_string().contains("@valkey/valkey-glide-linux-x64"));
}

#[test]
fn test_empty_module_is_fatal() {
    let source = FixtureSource::new().with_variant("darwin-x64", SymbolTable::new());
    let host = PlatformDescriptor::new(OsFamily::Macos, Arch::X86_64, Libc::Unknown);

    let err = initialize_with(host, &Overrides::new(), &source, &BindingConfig::default()).unwrap_err();

    assert!(matches!(err, InitError::Load(LoadError::EmptyModule { .. })));
}

#[test]
fn test_partial_module_published_leniently() {
    let source = FixtureSource::new().with_variant("linux-x64", fabricate(["GlideClient", "Logger"]));
    let host = PlatformDescriptor::new(OsFamily::Linux, Arch::X86_64, Libc::Unknown);

    let binding = initialize_with(host, &Overrides::new(), &source, &BindingConfig::default()).unwrap();

    let ns = binding.namespace();
    assert_eq!(ns.exports().len(), EXPECTED_SYMBOLS.len());
    assert_eq!(ns.missing().len(), EXPECTED_SYMBOLS.len() - 2);
    assert_eq!(ns.exports().get("TimeoutError"), Some(&None));
}
