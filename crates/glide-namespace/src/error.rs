use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("native module is missing {} symbol(s) of client surface v{version}: {}", .missing.len(), .missing.join(", "))]
    MissingSymbols { version: u32, missing: Vec<String> },
}
