use glide_platform::{Arch, Libc, OsFamily};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unsupported OS: {os}, architecture: {arch}")]
    UnsupportedPlatform { os: OsFamily, arch: Arch },

    #[error("unsupported OS: linux, architecture: {arch}, libc: {libc} (expected glibc or musl)")]
    UnknownLibc { arch: Arch, libc: Libc },
}
