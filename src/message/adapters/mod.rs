//! Persistence adapters for the message module.
//!
//! - [`memory::InMemoryMessageRepository`]: thread-safe in-memory storage
//! - [`postgres::PostgresMessageRepository`]: `PostgreSQL` persistence using
//!   Diesel
//!
//! Both implement [`MessageRepository`] and order list results by creation
//! time.
//!
//! [`MessageRepository`]: crate::message::ports::MessageRepository

pub mod memory;
pub mod postgres;
