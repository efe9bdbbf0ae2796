//! Diesel row models for message persistence.

use super::schema::messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Trimmed content.
    pub content: String,
    /// Trimmed author.
    pub author: String,
    /// Status token.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Latest publication timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// Logical deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for message records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Message identifier.
    pub id: uuid::Uuid,
    /// Trimmed content.
    pub content: String,
    /// Trimmed author.
    pub author: String,
    /// Status token.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Latest publication timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// Logical deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Mutable columns written when an existing message is saved again.
///
/// `created_at` is immutable and therefore absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = messages)]
#[diesel(treat_none_as_null = true)]
pub struct MessageChangeset {
    /// Trimmed content.
    pub content: String,
    /// Trimmed author.
    pub author: String,
    /// Status token.
    pub status: String,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Latest publication timestamp.
    pub published_at: Option<DateTime<Utc>>,
    /// Logical deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
}
