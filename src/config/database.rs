//! `PostgreSQL` connection configuration.

use super::ValidationError;
use crate::message::adapters::postgres::MessagePgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the `PostgreSQL` message repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostgresConfig {
    /// `PostgreSQL` connection URL.
    #[serde(default)]
    pub url: String,

    /// Maximum pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection.
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_secs: u64,
}

impl PostgresConfig {
    /// Returns the connection checkout timeout.
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Validates the connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the URL is missing or not a
    /// `PostgreSQL` URL, or when the pool size is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("database.url"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::EmptyPool);
        }
        Ok(())
    }

    /// Builds the Diesel connection pool used by
    /// [`PostgresMessageRepository`](crate::message::adapters::postgres::PostgresMessageRepository).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when the pool cannot establish its initial
    /// connections.
    pub fn build_pool(&self) -> Result<MessagePgPool, PoolError> {
        let manager = ConnectionManager::<PgConnection>::new(self.url.as_str());
        Pool::builder()
            .max_size(self.max_connections)
            .connection_timeout(self.connection_timeout())
            .build(manager)
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            connection_timeout_secs: default_connection_timeout(),
        }
    }
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_connection_timeout() -> u64 {
    30
}
