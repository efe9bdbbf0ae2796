//! `PostgreSQL` repository implementation for message storage.

use super::{
    models::{MessageChangeset, MessageRow, NewMessageRow},
    schema::messages,
};
use crate::message::{
    domain::{Message, MessageId, MessageStatus, PersistedMessageData},
    ports::{MessageRepository, MessageRepositoryError, MessageRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by message adapters.
pub type MessagePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed message repository.
///
/// List results are ordered by `created_at`, then `id`.
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: MessagePgPool,
}

impl PostgresMessageRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MessageRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MessageRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MessageRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MessageRepositoryError::persistence)?
    }

    async fn load_where<F>(&self, query: F) -> MessageRepositoryResult<Vec<Message>>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<Vec<MessageRow>> + Send + 'static,
    {
        self.run_blocking(move |connection| {
            let rows = query(connection).map_err(MessageRepositoryError::persistence)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn save(&self, message: &Message) -> MessageRepositoryResult<Message> {
        let new_row = to_new_row(message);
        let changeset = to_changeset(message);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(messages::table)
                .values(&new_row)
                .on_conflict(messages::id)
                .do_update()
                .set(&changeset)
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(connection)
                .map_err(MessageRepositoryError::persistence)?;
            row_to_message(row)
        })
        .await
    }

    async fn find_by_id(&self, id: MessageId) -> MessageRepositoryResult<Option<Message>> {
        self.run_blocking(move |connection| {
            let row = messages::table
                .filter(messages::id.eq(id.into_inner()))
                .select(MessageRow::as_select())
                .first::<MessageRow>(connection)
                .optional()
                .map_err(MessageRepositoryError::persistence)?;
            row.map(row_to_message).transpose()
        })
        .await
    }

    async fn find_by_status(
        &self,
        status: MessageStatus,
    ) -> MessageRepositoryResult<Vec<Message>> {
        self.load_where(move |connection| {
            messages::table
                .filter(messages::status.eq(status.as_str()))
                .order((messages::created_at.asc(), messages::id.asc()))
                .select(MessageRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_author(&self, author: &str) -> MessageRepositoryResult<Vec<Message>> {
        let lookup_author = author.to_owned();
        self.load_where(move |connection| {
            messages::table
                .filter(messages::author.eq(lookup_author))
                .order((messages::created_at.asc(), messages::id.asc()))
                .select(MessageRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_all_active(&self) -> MessageRepositoryResult<Vec<Message>> {
        self.load_where(|connection| {
            messages::table
                .filter(messages::status.ne(MessageStatus::Deleted.as_str()))
                .order((messages::created_at.asc(), messages::id.asc()))
                .select(MessageRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn delete_by_id(&self, id: MessageId) -> MessageRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(messages::table.filter(messages::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(MessageRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn count_by_status(&self, status: MessageStatus) -> MessageRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count = messages::table
                .filter(messages::status.eq(status.as_str()))
                .count()
                .get_result::<i64>(connection)
                .map_err(MessageRepositoryError::persistence)?;
            u64::try_from(count).map_err(MessageRepositoryError::invalid_persisted_data)
        })
        .await
    }
}

fn to_new_row(message: &Message) -> NewMessageRow {
    NewMessageRow {
        id: message.id().into_inner(),
        content: message.content().to_owned(),
        author: message.author().to_owned(),
        status: message.status().as_str().to_owned(),
        created_at: message.created_at(),
        updated_at: message.updated_at(),
        published_at: message.published_at(),
        deleted_at: message.deleted_at(),
    }
}

fn to_changeset(message: &Message) -> MessageChangeset {
    MessageChangeset {
        content: message.content().to_owned(),
        author: message.author().to_owned(),
        status: message.status().as_str().to_owned(),
        updated_at: message.updated_at(),
        published_at: message.published_at(),
        deleted_at: message.deleted_at(),
    }
}

fn row_to_message(row: MessageRow) -> MessageRepositoryResult<Message> {
    let MessageRow {
        id,
        content,
        author,
        status: persisted_status,
        created_at,
        updated_at,
        published_at,
        deleted_at,
    } = row;

    let status = MessageStatus::try_from(persisted_status.as_str())
        .map_err(MessageRepositoryError::invalid_persisted_data)?;

    Message::from_persisted(PersistedMessageData {
        id: MessageId::from_uuid(id),
        content,
        author,
        status,
        created_at,
        updated_at,
        published_at,
        deleted_at,
    })
    .map_err(MessageRepositoryError::invalid_persisted_data)
}

#[cfg(test)]
mod tests {
    //! Row conversion tests; they need no database.

    use super::{MessageRow, row_to_message, to_changeset, to_new_row};
    use crate::message::{
        domain::{Message, MessageStatus},
        ports::MessageRepositoryError,
    };
    use chrono::{TimeDelta, TimeZone, Utc};
    use eyre::{bail, ensure};
    use mockable::DefaultClock;
    use rstest::rstest;

    fn row_with(status: &str, content: &str) -> eyre::Result<MessageRow> {
        let created_at = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
            .single()
            .ok_or_else(|| eyre::eyre!("fixed timestamp is unambiguous"))?;
        let published_at = matches!(status, "PUBLISHED" | "ARCHIVED").then_some(created_at);
        let deleted_at = (status == "DELETED").then_some(created_at);
        Ok(MessageRow {
            id: uuid::Uuid::new_v4(),
            content: content.to_owned(),
            author: "Alice".to_owned(),
            status: status.to_owned(),
            created_at,
            updated_at: created_at,
            published_at,
            deleted_at,
        })
    }

    #[rstest]
    fn new_row_mirrors_published_message() -> eyre::Result<()> {
        let mut message = Message::new_draft("Hello", "Alice", &DefaultClock)?;
        message.publish(&DefaultClock)?;

        let row = to_new_row(&message);
        let changeset = to_changeset(&message);

        ensure!(row.id == message.id().into_inner());
        ensure!(row.status == "PUBLISHED");
        ensure!(row.published_at == message.published_at());
        ensure!(row.deleted_at.is_none());
        ensure!(changeset.status == row.status);
        ensure!(changeset.updated_at == message.updated_at());
        Ok(())
    }

    #[rstest]
    fn row_converts_back_into_message() -> eyre::Result<()> {
        let row = row_with("ARCHIVED", "Stored content")?;
        let id = row.id;

        let message = row_to_message(row)?;

        ensure!(message.id().into_inner() == id);
        ensure!(message.status() == MessageStatus::Archived);
        ensure!(message.content() == "Stored content");
        Ok(())
    }

    #[rstest]
    #[case("UNKNOWN", "Stored content")]
    #[case("DRAFT", "   ")]
    fn corrupt_row_is_reported_as_invalid_persisted_data(
        #[case] status: &str,
        #[case] content: &str,
    ) -> eyre::Result<()> {
        let result = row_to_message(row_with(status, content)?);
        if !matches!(result, Err(MessageRepositoryError::InvalidPersistedData(_))) {
            bail!("expected InvalidPersistedData, got {result:?}");
        }
        Ok(())
    }

    fn clear_deleted_at(row: &mut MessageRow) {
        row.deleted_at = None;
    }

    fn set_deleted_at(row: &mut MessageRow) {
        row.deleted_at = Some(row.created_at);
    }

    fn clear_published_at(row: &mut MessageRow) {
        row.published_at = None;
    }

    fn set_published_at(row: &mut MessageRow) {
        row.published_at = Some(row.created_at);
    }

    fn rewind_updated_at(row: &mut MessageRow) {
        row.updated_at = row.created_at - TimeDelta::seconds(1);
    }

    #[rstest]
    #[case::deleted_without_deleted_at("DELETED", clear_deleted_at)]
    #[case::draft_with_deleted_at("DRAFT", set_deleted_at)]
    #[case::published_without_published_at("PUBLISHED", clear_published_at)]
    #[case::archived_without_published_at("ARCHIVED", clear_published_at)]
    #[case::draft_with_published_at("DRAFT", set_published_at)]
    #[case::updated_before_created("ARCHIVED", rewind_updated_at)]
    fn row_with_inconsistent_timestamps_is_invalid_persisted_data(
        #[case] status: &str,
        #[case] corrupt: fn(&mut MessageRow),
    ) -> eyre::Result<()> {
        let mut row = row_with(status, "Stored content")?;
        corrupt(&mut row);

        let result = row_to_message(row);

        if !matches!(result, Err(MessageRepositoryError::InvalidPersistedData(_))) {
            bail!("expected InvalidPersistedData, got {result:?}");
        }
        Ok(())
    }
}
