//! Unit tests for the message module.
//!
//! Tests are organised by concept: the status table, the aggregate, and the
//! orchestration services.
