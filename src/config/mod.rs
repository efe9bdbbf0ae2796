//! Runtime configuration.
//!
//! Values are read from environment variables with the `BULLETIN` prefix;
//! nested keys use a double underscore, so `BULLETIN__DATABASE__URL` maps to
//! `database.url`. A `.env` file is honoured when present.

mod database;
mod error;

pub use database::PostgresConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use tracing::debug;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "BULLETIN";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulletinConfig {
    /// `PostgreSQL` repository settings.
    #[serde(default)]
    pub database: PostgresConfig,
}

impl BulletinConfig {
    /// Loads configuration from the process environment and `.env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when values cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            debug!(error = %err, "no .env file loaded");
        }
        Self::load_from(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    /// Loads configuration from an explicit environment source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when values cannot be parsed.
    pub fn load_from(environment: config::Environment) -> Result<Self, ConfigError> {
        let loaded = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(loaded)
    }

    /// Validates every configuration section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()
    }
}
