//! In-memory message repository for tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::message::{
    domain::{Message, MessageId, MessageStatus},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};

/// Thread-safe in-memory message repository.
///
/// List results are ordered by creation time, then identifier. That order is
/// a property of this adapter, not of the [`MessageRepository`] contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages, whatever their status.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] if the lock is
    /// poisoned.
    pub fn len(&self) -> MessageRepositoryResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns whether the repository holds no messages.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] if the lock is
    /// poisoned.
    pub fn is_empty(&self) -> MessageRepositoryResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> MessageRepositoryResult<RwLockReadGuard<'_, HashMap<MessageId, Message>>> {
        self.messages.read().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> MessageRepositoryResult<RwLockWriteGuard<'_, HashMap<MessageId, Message>>> {
        self.messages.write().map_err(|err| {
            MessageRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn collect_where(
        &self,
        predicate: impl Fn(&Message) -> bool,
    ) -> MessageRepositoryResult<Vec<Message>> {
        let messages = self.read()?;
        let mut found: Vec<Message> = messages
            .values()
            .filter(|message| predicate(message))
            .cloned()
            .collect();
        found.sort_by_key(|message| (message.created_at(), message.id()));
        Ok(found)
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: &Message) -> MessageRepositoryResult<Message> {
        let mut messages = self.write()?;
        messages.insert(message.id(), message.clone());
        Ok(message.clone())
    }

    async fn find_by_id(&self, id: MessageId) -> MessageRepositoryResult<Option<Message>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_status(
        &self,
        status: MessageStatus,
    ) -> MessageRepositoryResult<Vec<Message>> {
        self.collect_where(|message| message.status() == status)
    }

    async fn find_by_author(&self, author: &str) -> MessageRepositoryResult<Vec<Message>> {
        self.collect_where(|message| message.author() == author)
    }

    async fn find_all_active(&self) -> MessageRepositoryResult<Vec<Message>> {
        self.collect_where(|message| !message.is_deleted())
    }

    async fn delete_by_id(&self, id: MessageId) -> MessageRepositoryResult<()> {
        self.write()?.remove(&id);
        Ok(())
    }

    async fn count_by_status(&self, status: MessageStatus) -> MessageRepositoryResult<u64> {
        let messages = self.read()?;
        let count = messages
            .values()
            .filter(|message| message.status() == status)
            .count();
        u64::try_from(count).map_err(MessageRepositoryError::persistence)
    }
}
