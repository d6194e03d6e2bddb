//! Native module loading.
//!
//! # Architecture
//!
//! The loader turns a scope and a [`VariantKey`](glide_variant::VariantKey)
//! into a [`ModuleName`] and asks a [`ModuleSource`] to open it. It does not
//! know how modules are stored; sources do:
//!
//! - [`DynamicSource`] opens shared libraries through the platform loader.
//! - [`FixtureSource`] serves fabricated tables from memory.
//!
//! A module that opens but exports nothing is rejected here. Everything
//! else about the table's contents is left to the publisher.
//!
//! # Example
//!
//! ```
//! use glide_loader::{BASE_NAME, FixtureSource, Scope, fabricate, load};
//! use glide_variant::VariantKey;
//!
//! let source = FixtureSource::new().with_variant("linux-x64", fabricate(["GlideClient"]));
//! let table = load(&source, &Scope::default(), BASE_NAME, &VariantKey::from("linux-x64")).unwrap();
//!
//! assert!(table.contains("GlideClient"));
//! assert_eq!(source.attempts(), ["@valkey/valkey-glide-linux-x64"]);
//! ```

pub use dynamic::{DynamicSource, MODULE_PATH_ENV};
pub use error::{LoadError, Result};
pub use fixture::{FixtureSource, fabricate};
pub use name::{BASE_NAME, DEFAULT_SCOPE, ModuleName, SCOPE_SENTINEL, Scope};
pub use source::{ModuleSource, load, load_module};
pub use symbol::{Symbol, SymbolKind, SymbolTable};

pub mod abi;
mod dynamic;
mod error;
mod fixture;
mod name;
mod source;
mod symbol;
