//! Application services for message lifecycle orchestration.

mod lifecycle;
mod query;

pub use lifecycle::{
    CreateMessageRequest, MessageLifecycleError, MessageLifecycleResult, MessageLifecycleService,
    UpdateMessageRequest,
};
pub use query::MessageQueryService;
