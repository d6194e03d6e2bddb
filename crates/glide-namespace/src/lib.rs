//! Publication of a loaded native module as the stable client surface.
//!
//! [`publish`] copies every name of an [`ExpectedSymbolSet`] out of a
//! [`SymbolTable`](glide_loader::SymbolTable) into the export map, and merges
//! the whole table, surface or not, into a [`GlobalScope`]. Missing surface
//! names are passed through as absent unless [`PublishPolicy::Strict`] is
//! chosen. Nothing is ever substituted for a missing value.

pub use error::{Result, ValidationError};
pub use global::GlobalScope;
pub use publish::{PublishPolicy, PublishedNamespace, publish, publish_into};
pub use surface::{EXPECTED_SYMBOLS, ExpectedSymbolSet, SURFACE_VERSION};

mod error;
mod global;
mod publish;
mod surface;
