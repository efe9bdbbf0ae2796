//! Bulletin: lifecycle management for short authored messages.
//!
//! This crate provides the message aggregate, its status state machine, a
//! repository port with in-memory and `PostgreSQL` adapters, and the use-case
//! services that orchestrate them.
//!
//! # Architecture
//!
//! Bulletin follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`message`]: Message aggregate, lifecycle services and persistence
//! - [`config`]: Environment-driven runtime configuration

pub mod config;
pub mod message;
