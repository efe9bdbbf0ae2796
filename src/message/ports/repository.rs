//! Repository port for message persistence and lookup.

use crate::message::domain::{Message, MessageId, MessageStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageRepositoryResult<T> = Result<T, MessageRepositoryError>;

/// Message persistence contract.
///
/// Implementations must make `save` an idempotent upsert keyed by message
/// identifier and must return reads consistent with previous writes. List
/// results carry no ordering guarantee through this trait; adapters that
/// order their results document it themselves.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts or replaces the message with the same identifier and returns
    /// the persisted representation.
    async fn save(&self, message: &Message) -> MessageRepositoryResult<Message>;

    /// Finds a message by identifier.
    ///
    /// Returns `None` when the message does not exist. Logically deleted
    /// messages are still returned.
    async fn find_by_id(&self, id: MessageId) -> MessageRepositoryResult<Option<Message>>;

    /// Returns all messages with the given status.
    async fn find_by_status(&self, status: MessageStatus)
    -> MessageRepositoryResult<Vec<Message>>;

    /// Returns all messages whose author equals `author` exactly.
    ///
    /// Matching is case-sensitive and the argument is not trimmed.
    async fn find_by_author(&self, author: &str) -> MessageRepositoryResult<Vec<Message>>;

    /// Returns every message whose status is not `Deleted`.
    async fn find_all_active(&self) -> MessageRepositoryResult<Vec<Message>>;

    /// Physically removes a message.
    ///
    /// Removing a missing identifier is not guaranteed to be a no-op; callers
    /// check existence first when that matters.
    async fn delete_by_id(&self, id: MessageId) -> MessageRepositoryResult<()>;

    /// Counts messages with the given status.
    async fn count_by_status(&self, status: MessageStatus) -> MessageRepositoryResult<u64>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    /// Persisted data could not be reconstructed into a valid message.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a data-quality error from a persisted row.
    #[must_use]
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }
}
