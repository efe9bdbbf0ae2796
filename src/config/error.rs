//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration sources could not be read or deserialized.
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    /// A loaded value failed semantic validation.
    #[error("configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by semantic validation of configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value is missing or empty.
    #[error("required configuration missing: {0}")]
    MissingRequired(&'static str),

    /// The database URL does not use a `PostgreSQL` scheme.
    #[error("database URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    /// The pool must allow at least one connection.
    #[error("database pool size must be at least 1")]
    EmptyPool,
}
