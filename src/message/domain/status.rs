//! Message lifecycle status and its transition table.

use super::ParseMessageStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a message.
///
/// `Deleted` is terminal: once a message reaches it no further transition is
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    /// Initial, editable, unpublished state.
    Draft,
    /// Visible state.
    Published,
    /// Withdrawn after publication; may be republished.
    Archived,
    /// Logically deleted. The record remains in storage until hard-deleted.
    Deleted,
}

impl MessageStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::Published, Self::Archived, Self::Deleted];

    /// Returns the canonical storage and wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
            Self::Deleted => "DELETED",
        }
    }

    /// Returns the human-readable name used in diagnostics.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Archived => "Archived",
            Self::Deleted => "Deleted",
        }
    }

    /// Returns whether the lifecycle permits moving from `self` to `target`.
    ///
    /// ```
    /// use bulletin::message::domain::MessageStatus;
    ///
    /// assert!(MessageStatus::Archived.can_transition_to(MessageStatus::Published));
    /// assert!(!MessageStatus::Draft.can_transition_to(MessageStatus::Archived));
    /// ```
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft | Self::Archived, Self::Published)
                | (Self::Published, Self::Archived)
                | (Self::Draft | Self::Published | Self::Archived, Self::Deleted)
        )
    }

    /// Returns whether no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MessageStatus {
    type Error = ParseMessageStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            "DELETED" => Ok(Self::Deleted),
            _ => Err(ParseMessageStatusError(value.to_owned())),
        }
    }
}
