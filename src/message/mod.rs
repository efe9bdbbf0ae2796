//! Message lifecycle management for Bulletin.
//!
//! A message is a short text with an author that moves through a fixed
//! lifecycle: draft, published, archived and deleted. The module follows
//! hexagonal architecture:
//!
//! - Domain types and the status state machine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bulletin::message::{
//!     adapters::memory::InMemoryMessageRepository,
//!     domain::MessageStatus,
//!     services::{CreateMessageRequest, MessageLifecycleService},
//! };
//! use mockable::DefaultClock;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let service = MessageLifecycleService::new(
//!     Arc::new(InMemoryMessageRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//! let draft = service
//!     .create(CreateMessageRequest::new("Hello", "Alice"))
//!     .await
//!     .expect("valid message");
//! let published = service.publish(draft.id()).await.expect("draft publishes");
//! assert_eq!(published.status(), MessageStatus::Published);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
