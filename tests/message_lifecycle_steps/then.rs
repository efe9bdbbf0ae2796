//! Then steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use bulletin::message::domain::{ErrorKind, MessageStatus};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn ensure_failed_with(world: &MessageWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;
    eyre::ensure!(
        err.kind() == expected,
        "expected {expected:?} error, got {err:?}"
    );
    Ok(())
}

#[then(r#"the message status is "{status}""#)]
fn message_status_is(world: &MessageWorld, status: String) -> Result<(), eyre::Report> {
    let expected = MessageStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let message = world.message()?;
    eyre::ensure!(
        message.status() == expected,
        "expected status {expected}, found {}",
        message.status()
    );
    Ok(())
}

#[then(r#"the message content is "{content}""#)]
fn message_content_is(world: &MessageWorld, content: String) -> Result<(), eyre::Report> {
    let message = world.message()?;
    eyre::ensure!(
        message.content() == content,
        "expected content {content:?}, found {:?}",
        message.content()
    );
    Ok(())
}

#[then("the publication time has moved forward")]
fn publication_time_moved_forward(world: &MessageWorld) -> Result<(), eyre::Report> {
    let current = world.message()?;
    let previous = world
        .previous_message
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing earlier message state"))?;
    eyre::ensure!(current.published_at() > previous.published_at());
    eyre::ensure!(current.created_at() == previous.created_at());
    Ok(())
}

#[then("the operation fails with an already deleted error")]
fn fails_with_already_deleted(world: &MessageWorld) -> Result<(), eyre::Report> {
    ensure_failed_with(world, ErrorKind::AlreadyDeleted)
}

#[then("the operation fails with an invalid argument error")]
fn fails_with_invalid_argument(world: &MessageWorld) -> Result<(), eyre::Report> {
    ensure_failed_with(world, ErrorKind::InvalidArgument)
}

#[then("the message is still stored")]
fn message_still_stored(world: &MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let stored = run_async(world.queries.get(id)).wrap_err("look up message")?;
    eyre::ensure!(stored.is_some(), "expected message {id} to remain stored");
    Ok(())
}

#[then("the message is no longer stored")]
fn message_no_longer_stored(world: &MessageWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.last_error.is_none(), "hard delete failed: {:?}", world.last_error);
    let id = world.message()?.id();
    let stored = run_async(world.queries.get(id)).wrap_err("look up message")?;
    eyre::ensure!(stored.is_none(), "expected message {id} to be removed");
    Ok(())
}

#[then("no messages are stored")]
fn no_messages_stored(world: &MessageWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.repository.is_empty()?, "expected an empty repository");
    Ok(())
}
