//! Service layer for message creation and lifecycle transitions.

use crate::message::{
    domain::{ErrorKind, Message, MessageDomainError, MessageId, MessageStatus},
    ports::{MessageRepository, MessageRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a draft message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMessageRequest {
    content: String,
    author: String,
}

impl CreateMessageRequest {
    /// Creates a request from raw, untrimmed content and author.
    #[must_use]
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }
}

/// Request payload for replacing a message's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMessageRequest {
    message_id: MessageId,
    content: String,
}

impl UpdateMessageRequest {
    /// Creates a request for the given message and raw content.
    #[must_use]
    pub fn new(message_id: MessageId, content: impl Into<String>) -> Self {
        Self {
            message_id,
            content: content.into(),
        }
    }
}

/// Service-level errors for message lifecycle operations.
#[derive(Debug, Error)]
pub enum MessageLifecycleError {
    /// Domain validation or transition check failed.
    #[error(transparent)]
    Domain(#[from] MessageDomainError),

    /// No message exists with the identifier.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// Logical deletion was requested for an already deleted message.
    #[error("message {0} is already deleted")]
    AlreadyDeleted(MessageId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] MessageRepositoryError),
}

impl MessageLifecycleError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AlreadyDeleted(_) => ErrorKind::AlreadyDeleted,
            Self::Repository(_) => ErrorKind::Persistence,
        }
    }
}

/// Result type for message lifecycle service operations.
pub type MessageLifecycleResult<T> = Result<T, MessageLifecycleError>;

/// Message lifecycle orchestration service.
///
/// Each operation loads the message when an identifier is given, applies a
/// single aggregate mutation, and saves only if the mutation succeeded. No
/// isolation is provided between the load and the save.
#[derive(Clone)]
pub struct MessageLifecycleService<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> MessageLifecycleService<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new message lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a draft message.
    ///
    /// Nothing is saved when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`MessageLifecycleError::Domain`] when content or author is
    /// invalid, or [`MessageLifecycleError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, request: CreateMessageRequest) -> MessageLifecycleResult<Message> {
        let CreateMessageRequest { content, author } = request;
        debug!("creating draft message");

        let message = Message::new_draft(content, author, &*self.clock)?;
        let saved = self.repository.save(&message).await?;
        info!(message_id = %saved.id(), "draft message created");
        Ok(saved)
    }

    /// Replaces the content of an existing message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageLifecycleError::NotFound`] when the message does not
    /// exist, or [`MessageLifecycleError::Domain`] when it is deleted or the
    /// new content is invalid.
    pub async fn update(&self, request: UpdateMessageRequest) -> MessageLifecycleResult<Message> {
        let UpdateMessageRequest {
            message_id,
            content,
        } = request;
        debug!(%message_id, "updating message content");

        let mut message = self.find_or_not_found(message_id).await?;
        message.update_content(content, &*self.clock)?;
        let saved = self.repository.save(&message).await?;
        info!(%message_id, "message content updated");
        Ok(saved)
    }

    /// Publishes a draft or archived message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageLifecycleError::NotFound`] when the message does not
    /// exist, or [`MessageLifecycleError::Domain`] when the lifecycle forbids
    /// publication.
    pub async fn publish(&self, message_id: MessageId) -> MessageLifecycleResult<Message> {
        debug!(%message_id, "publishing message");

        let mut message = self.find_or_not_found(message_id).await?;
        message.publish(&*self.clock)?;
        let saved = self.repository.save(&message).await?;
        info!(%message_id, status = %saved.status(), "message published");
        Ok(saved)
    }

    /// Archives a published message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageLifecycleError::NotFound`] when the message does not
    /// exist, or [`MessageLifecycleError::Domain`] when the message is not
    /// published.
    pub async fn archive(&self, message_id: MessageId) -> MessageLifecycleResult<Message> {
        debug!(%message_id, "archiving message");

        let mut message = self.find_or_not_found(message_id).await?;
        message.archive(&*self.clock)?;
        let saved = self.repository.save(&message).await?;
        info!(%message_id, status = %saved.status(), "message archived");
        Ok(saved)
    }

    /// Logically deletes a message.
    ///
    /// The record stays in storage with status `Deleted`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageLifecycleError::NotFound`] when the message does not
    /// exist, or [`MessageLifecycleError::AlreadyDeleted`] when it is already
    /// deleted.
    pub async fn delete(&self, message_id: MessageId) -> MessageLifecycleResult<()> {
        debug!(%message_id, "deleting message");

        let mut message = self.find_or_not_found(message_id).await?;
        if message.status() == MessageStatus::Deleted {
            warn!(%message_id, "message is already deleted");
            return Err(MessageLifecycleError::AlreadyDeleted(message_id));
        }
        message.delete(&*self.clock)?;
        self.repository.save(&message).await?;
        info!(%message_id, "message deleted");
        Ok(())
    }

    /// Physically removes a message from storage, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`MessageLifecycleError::NotFound`] when the message does not
    /// exist.
    pub async fn hard_delete(&self, message_id: MessageId) -> MessageLifecycleResult<()> {
        debug!(%message_id, "hard-deleting message");

        if self.repository.find_by_id(message_id).await?.is_none() {
            warn!(%message_id, "message not found");
            return Err(MessageLifecycleError::NotFound(message_id));
        }
        self.repository.delete_by_id(message_id).await?;
        info!(%message_id, "message removed from storage");
        Ok(())
    }

    async fn find_or_not_found(&self, message_id: MessageId) -> MessageLifecycleResult<Message> {
        let Some(message) = self.repository.find_by_id(message_id).await? else {
            warn!(%message_id, "message not found");
            return Err(MessageLifecycleError::NotFound(message_id));
        };
        Ok(message)
    }
}
