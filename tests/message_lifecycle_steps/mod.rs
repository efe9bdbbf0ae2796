//! Step definitions for message lifecycle behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
