//! Message aggregate root.

use super::{MessageDomainError, MessageId, MessageStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Maximum number of characters allowed in trimmed message content.
pub const MAX_CONTENT_LENGTH: usize = 1000;

/// Message aggregate root.
///
/// Content and author are always trimmed and non-empty. Every mutation goes
/// through a method that checks the lifecycle first and leaves the message
/// untouched when it fails. Equality and hashing consider only the
/// identifier.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    id: MessageId,
    content: String,
    author: String,
    status: MessageStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted message aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMessageData {
    /// Persisted message identifier.
    pub id: MessageId,
    /// Persisted content.
    pub content: String,
    /// Persisted author.
    pub author: String,
    /// Persisted lifecycle status.
    pub status: MessageStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted latest publication timestamp, if ever published.
    pub published_at: Option<DateTime<Utc>>,
    /// Persisted deletion timestamp, if deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a new draft message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::EmptyContent`],
    /// [`MessageDomainError::ContentTooLong`] or
    /// [`MessageDomainError::EmptyAuthor`] when a field fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bulletin::message::domain::{Message, MessageStatus};
    /// use mockable::DefaultClock;
    ///
    /// let message = Message::new_draft("  Hello  ", "Alice", &DefaultClock)
    ///     .expect("valid draft");
    /// assert_eq!(message.content(), "Hello");
    /// assert_eq!(message.status(), MessageStatus::Draft);
    /// ```
    pub fn new_draft(
        content: impl AsRef<str>,
        author: impl AsRef<str>,
        clock: &impl Clock,
    ) -> Result<Self, MessageDomainError> {
        let validated_content = validate_content(content.as_ref())?;
        let validated_author = validate_author(author.as_ref())?;
        let timestamp = clock.utc();

        Ok(Self {
            id: MessageId::new(),
            content: validated_content,
            author: validated_author,
            status: MessageStatus::Draft,
            created_at: timestamp,
            updated_at: timestamp,
            published_at: None,
            deleted_at: None,
        })
    }

    /// Reconstructs a message from persisted storage.
    ///
    /// Content and author are validated with the same rules as
    /// [`Message::new_draft`], and the timestamps are checked against the
    /// status, so a corrupted row cannot produce an invalid aggregate.
    ///
    /// # Errors
    ///
    /// Returns a [`MessageDomainError`] when the stored content or author is
    /// invalid, or [`MessageDomainError::InconsistentTimestamps`] when the
    /// timestamps contradict the status.
    pub fn from_persisted(data: PersistedMessageData) -> Result<Self, MessageDomainError> {
        validate_timestamps(&data)?;
        let PersistedMessageData {
            id,
            content,
            author,
            status,
            created_at,
            updated_at,
            published_at,
            deleted_at,
        } = data;

        Ok(Self {
            id,
            content: validate_content(&content)?,
            author: validate_author(&author)?,
            status,
            created_at,
            updated_at,
            published_at,
            deleted_at,
        })
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the trimmed content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the trimmed author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> MessageStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the latest publication timestamp, if ever published.
    #[must_use]
    pub const fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    /// Returns the deletion timestamp, if deleted.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns whether the message is currently published.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self.status, MessageStatus::Published)
    }

    /// Returns whether the message is logically deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self.status, MessageStatus::Deleted)
    }

    /// Publishes the message, stamping `published_at`.
    ///
    /// Republishing an archived message overwrites the previous publication
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::InvalidStatusTransition`] unless the
    /// message is a draft or archived.
    pub fn publish(&mut self, clock: &impl Clock) -> Result<(), MessageDomainError> {
        self.ensure_transition(MessageStatus::Published)?;
        let timestamp = clock.utc();
        self.status = MessageStatus::Published;
        self.published_at = Some(timestamp);
        self.updated_at = timestamp;
        Ok(())
    }

    /// Archives a published message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::InvalidStatusTransition`] unless the
    /// message is published.
    pub fn archive(&mut self, clock: &impl Clock) -> Result<(), MessageDomainError> {
        self.ensure_transition(MessageStatus::Archived)?;
        self.status = MessageStatus::Archived;
        self.touch(clock);
        Ok(())
    }

    /// Logically deletes the message, stamping `deleted_at`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::InvalidStatusTransition`] when the
    /// message is already deleted.
    pub fn delete(&mut self, clock: &impl Clock) -> Result<(), MessageDomainError> {
        self.ensure_transition(MessageStatus::Deleted)?;
        let timestamp = clock.utc();
        self.status = MessageStatus::Deleted;
        self.deleted_at = Some(timestamp);
        self.updated_at = timestamp;
        Ok(())
    }

    /// Replaces the content with a trimmed, validated value.
    ///
    /// Content updates are not status transitions, so the deleted check is
    /// made directly rather than through the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::MessageDeleted`] when the message is
    /// deleted, or a content validation error when `new_content` is empty or
    /// too long.
    pub fn update_content(
        &mut self,
        new_content: impl AsRef<str>,
        clock: &impl Clock,
    ) -> Result<(), MessageDomainError> {
        if self.is_deleted() {
            return Err(MessageDomainError::MessageDeleted(self.id));
        }
        self.content = validate_content(new_content.as_ref())?;
        self.touch(clock);
        Ok(())
    }

    const fn ensure_transition(&self, target: MessageStatus) -> Result<(), MessageDomainError> {
        if self.status.can_transition_to(target) {
            return Ok(());
        }
        Err(MessageDomainError::InvalidStatusTransition {
            message_id: self.id,
            from: self.status,
            to: target,
        })
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}

impl Hash for Message {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn validate_content(raw: &str) -> Result<String, MessageDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MessageDomainError::EmptyContent);
    }
    let length = trimmed.chars().count();
    if length > MAX_CONTENT_LENGTH {
        return Err(MessageDomainError::ContentTooLong {
            length,
            max: MAX_CONTENT_LENGTH,
        });
    }
    Ok(trimmed.to_owned())
}

fn validate_timestamps(data: &PersistedMessageData) -> Result<(), MessageDomainError> {
    let detail = if data.updated_at < data.created_at {
        Some("updated_at precedes created_at")
    } else if data.deleted_at.is_some() != (data.status == MessageStatus::Deleted) {
        Some("deleted_at must be set exactly when the status is DELETED")
    } else {
        match (data.status, data.published_at) {
            (MessageStatus::Draft, Some(_)) => Some("a draft cannot have published_at"),
            (MessageStatus::Published | MessageStatus::Archived, None) => {
                Some("a published or archived message needs published_at")
            }
            _ => None,
        }
    };

    detail.map_or(Ok(()), |reason| {
        Err(MessageDomainError::InconsistentTimestamps {
            message_id: data.id,
            detail: reason,
        })
    })
}

fn validate_author(raw: &str) -> Result<String, MessageDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MessageDomainError::EmptyAuthor);
    }
    Ok(trimmed.to_owned())
}
