//! Read-only message queries.

use super::MessageLifecycleResult;
use crate::message::{
    domain::{Message, MessageId, MessageStatus},
    ports::MessageRepository,
};
use std::sync::Arc;

/// Pass-through query service over the message repository.
///
/// Arguments are forwarded unchanged; validation of status tokens and author
/// strings belongs to the caller.
#[derive(Clone)]
pub struct MessageQueryService<R>
where
    R: MessageRepository,
{
    repository: Arc<R>,
}

impl<R> MessageQueryService<R>
where
    R: MessageRepository,
{
    /// Creates a new message query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Finds a message by identifier, including logically deleted ones.
    ///
    /// Returns `Ok(None)` when the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`super::MessageLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn get(&self, message_id: MessageId) -> MessageLifecycleResult<Option<Message>> {
        Ok(self.repository.find_by_id(message_id).await?)
    }

    /// Returns every message that is not logically deleted.
    ///
    /// # Errors
    ///
    /// Returns [`super::MessageLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_active(&self) -> MessageLifecycleResult<Vec<Message>> {
        Ok(self.repository.find_all_active().await?)
    }

    /// Returns every message with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`super::MessageLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_by_status(
        &self,
        status: MessageStatus,
    ) -> MessageLifecycleResult<Vec<Message>> {
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Returns every message written by exactly `author`.
    ///
    /// # Errors
    ///
    /// Returns [`super::MessageLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_by_author(&self, author: &str) -> MessageLifecycleResult<Vec<Message>> {
        Ok(self.repository.find_by_author(author).await?)
    }

    /// Counts messages with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`super::MessageLifecycleError::Repository`] when persistence
    /// lookup fails.
    pub async fn count_by_status(&self, status: MessageStatus) -> MessageLifecycleResult<u64> {
        Ok(self.repository.count_by_status(status).await?)
    }
}
