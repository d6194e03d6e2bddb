//! Native binding selection for the Valkey GLIDE client.
//!
//! One call runs the whole chain, synchronously:
//!
//! 1. detect the host ([`PlatformDescriptor`]),
//! 2. resolve the variant key, unless one is forced,
//! 3. load `<scope><base>-<variant>` through a [`ModuleSource`],
//! 4. publish the client surface and merge every exported name into the
//!    binding's global scope.
//!
//! [`initialize`] returns an owned [`Binding`]. Callers that want a single
//! process-wide instance use [`init_global`] instead, which runs the chain at
//! most once.
//!
//! # Example
//!
//! ```
//! use glide_binding::{BindingConfig, initialize_with};
//! use glide_loader::{FixtureSource, fabricate};
//! use glide_platform::{Arch, Libc, OsFamily, PlatformDescriptor};
//! use glide_variant::Overrides;
//!
//! let source = FixtureSource::new().with_variant("linux-musl-arm64", fabricate(["GlideClient"]));
//! let host = PlatformDescriptor::new(OsFamily::Linux, Arch::Arm64, Libc::Musl);
//!
//! let binding = initialize_with(host, &Overrides::new(), &source, &BindingConfig::default()).unwrap();
//! assert_eq!(binding.module().to_string(), "@valkey/valkey-glide-linux-musl-arm64");
//! ```
//!
//! [`PlatformDescriptor`]: glide_platform::PlatformDescriptor
//! [`ModuleSource`]: glide_loader::ModuleSource

pub use binding::{Binding, initialize, initialize_from_env, initialize_with};
pub use config::{BindingConfig, CONFIG_FILE, ENV_PREFIX};
pub use error::{ConfigError, InitError, Result};
pub use registry::{global, init_global, init_global_from_env, init_global_with, lookup_global};

mod binding;
mod config;
mod error;
mod registry;
