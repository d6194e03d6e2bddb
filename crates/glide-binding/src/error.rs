use glide_loader::LoadError;
use glide_namespace::ValidationError;
use glide_variant::ResolveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InitError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self { Self::Figment(Box::new(err)) }
}

/// Why the native binding could not be initialised. Always fatal.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("{source}; set `{override_var}` to force a native variant")]
    Resolve {
        source:       ResolveError,
        override_var: String,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validate(#[from] ValidationError),

    #[error("invalid binding configuration: {0}")]
    Config(#[from] ConfigError),
}
