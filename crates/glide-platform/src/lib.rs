//! Host platform detection for native binding selection.
//!
//! A [`PlatformDescriptor`] captures the three facts that decide which
//! compiled variant of a native module can run on this host:
//!
//! - the operating system family ([`OsFamily`]),
//! - the CPU architecture ([`Arch`]),
//! - on Linux only, the C runtime family ([`Libc`]).
//!
//! Detection never fails. Anything unrecognised comes back as `Unknown`
//! and it is up to the caller to decide whether that is fatal.

pub use arch::Arch;
pub use descriptor::PlatformDescriptor;
pub use error::{Error, Result};
pub use libc::Libc;
pub use os::OsFamily;

pub mod arch;
mod descriptor;
mod error;
pub mod libc;
pub mod os;
