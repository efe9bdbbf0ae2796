//! Shared world state for message lifecycle BDD scenarios.

use std::sync::{Arc, Mutex, PoisonError};

use bulletin::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::Message,
    services::{MessageLifecycleError, MessageLifecycleService, MessageQueryService},
};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock that moves forward one second on every reading, so each lifecycle
/// step observes a strictly later timestamp.
#[derive(Debug)]
pub struct StepClock {
    next: Mutex<DateTime<Utc>>,
}

impl StepClock {
    /// Creates a clock starting at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Mutex::new(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let now = *next;
        *next = now + TimeDelta::seconds(1);
        now
    }
}

/// Service type used by the BDD world.
pub type TestMessageService = MessageLifecycleService<InMemoryMessageRepository, StepClock>;

/// Scenario world for message lifecycle behaviour tests.
pub struct MessageWorld {
    pub repository: Arc<InMemoryMessageRepository>,
    pub service: TestMessageService,
    pub queries: MessageQueryService<InMemoryMessageRepository>,
    pub current_message: Option<Message>,
    pub previous_message: Option<Message>,
    pub last_error: Option<MessageLifecycleError>,
}

impl MessageWorld {
    /// Creates a world backed by an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryMessageRepository::new());
        Self {
            service: MessageLifecycleService::new(
                Arc::clone(&repository),
                Arc::new(StepClock::new()),
            ),
            queries: MessageQueryService::new(Arc::clone(&repository)),
            repository,
            current_message: None,
            previous_message: None,
            last_error: None,
        }
    }

    /// Returns the message the scenario is working on.
    pub fn message(&self) -> Result<&Message, eyre::Report> {
        self.current_message
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing message in scenario world"))
    }

    /// Records a successful mutation, keeping the prior state for comparison.
    pub fn record(&mut self, message: Message) {
        self.previous_message = self.current_message.replace(message);
    }

    /// Records the outcome of an operation that returns no message.
    pub fn record_outcome(&mut self, result: Result<(), MessageLifecycleError>) {
        self.last_error = result.err();
    }
}

impl Default for MessageWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageWorld {
    MessageWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
