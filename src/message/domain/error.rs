//! Error types for message domain validation and parsing.

use super::{MessageId, MessageStatus};
use thiserror::Error;

/// Coarse classification shared by every error the message core reports.
///
/// Outer adapters map these kinds onto their own status codes without
/// matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field failed validation.
    InvalidArgument,
    /// The message is in a state that forbids the operation.
    InvalidState,
    /// The lifecycle does not permit the requested status change.
    InvalidTransition,
    /// Logical deletion was requested for an already deleted message.
    AlreadyDeleted,
    /// No message exists with the requested identifier.
    NotFound,
    /// The persistence backend failed.
    Persistence,
}

/// Errors raised by the message aggregate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageDomainError {
    /// The content is empty after trimming.
    #[error("message content cannot be empty")]
    EmptyContent,

    /// The trimmed content exceeds the character limit.
    #[error("message content is too long ({length} characters, max {max})")]
    ContentTooLong {
        /// Character count of the trimmed content.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The author is empty after trimming.
    #[error("author cannot be empty")]
    EmptyAuthor,

    /// Persisted timestamps contradict the lifecycle status.
    #[error("message {message_id} has inconsistent timestamps: {detail}")]
    InconsistentTimestamps {
        /// Message whose stored state was rejected.
        message_id: MessageId,
        /// Which timestamp rule was broken.
        detail: &'static str,
    },

    /// The message is deleted and can no longer be modified.
    #[error("cannot modify deleted message {0}")]
    MessageDeleted(MessageId),

    /// The lifecycle does not allow the requested status change.
    #[error(
        "cannot transition message {message_id} from {} to {}",
        from.display_name(),
        to.display_name()
    )]
    InvalidStatusTransition {
        /// Message whose transition was rejected.
        message_id: MessageId,
        /// Current status.
        from: MessageStatus,
        /// Requested status.
        to: MessageStatus,
    },
}

impl MessageDomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyContent
            | Self::ContentTooLong { .. }
            | Self::EmptyAuthor
            | Self::InconsistentTimestamps { .. } => ErrorKind::InvalidArgument,
            Self::MessageDeleted(_) => ErrorKind::InvalidState,
            Self::InvalidStatusTransition { .. } => ErrorKind::InvalidTransition,
        }
    }
}

/// Error returned while parsing a status token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message status: {0}")]
pub struct ParseMessageStatusError(pub String);

/// Error returned while parsing a message identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid message identifier: {0}")]
pub struct ParseMessageIdError(pub String);
