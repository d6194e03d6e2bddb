use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("failed to load native module `{module}`: {reason}")]
    NotFound { module: String, reason: String },

    #[error("native module `{module}` loaded but exports no symbols")]
    EmptyModule { module: String },

    #[error("native module `{module}` was built for binding ABI {found}, expected {expected}")]
    AbiMismatch {
        module:   String,
        expected: u32,
        found:    u32,
    },
}

impl LoadError {
    /// True for the failures that mean "no usable module under that name".
    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. } | Self::EmptyModule { .. }) }

    /// The module name whose load was attempted.
    pub fn module(&self) -> &str {
        match self {
            Self::NotFound { module, .. } | Self::EmptyModule { module } | Self::AbiMismatch { module, .. } => module,
        }
    }
}
