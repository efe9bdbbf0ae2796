//! Domain model for the message lifecycle.
//!
//! The message domain owns field validation and the status state machine;
//! persistence and transport concerns stay outside this boundary.

mod error;
mod ids;
mod message;
mod status;

pub use error::{ErrorKind, MessageDomainError, ParseMessageIdError, ParseMessageStatusError};
pub use ids::MessageId;
pub use message::{MAX_CONTENT_LENGTH, Message, PersistedMessageData};
pub use status::MessageStatus;
