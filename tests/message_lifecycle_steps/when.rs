//! When steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use bulletin::message::{
    domain::Message,
    services::{CreateMessageRequest, MessageLifecycleError, UpdateMessageRequest},
};
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn apply(world: &mut MessageWorld, result: Result<Message, MessageLifecycleError>) {
    match result {
        Ok(message) => {
            world.record(message);
            world.last_error = None;
        }
        Err(err) => world.last_error = Some(err),
    }
}

#[when("the message is published")]
fn publish_message(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let result = run_async(world.service.publish(id));
    apply(world, result);
    Ok(())
}

#[when("the message is archived")]
fn archive_message(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let result = run_async(world.service.archive(id));
    apply(world, result);
    Ok(())
}

#[when(r#"the message content is updated to "{content}""#)]
fn update_message(world: &mut MessageWorld, content: String) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let result = run_async(
        world
            .service
            .update(UpdateMessageRequest::new(id, content)),
    );
    apply(world, result);
    Ok(())
}

#[when("the message is deleted")]
fn delete_message(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let result = run_async(world.service.delete(id));
    let succeeded = result.is_ok();
    world.record_outcome(result);
    if succeeded {
        let stored = run_async(world.queries.get(id))
            .wrap_err("reload deleted message")?
            .ok_or_else(|| eyre::eyre!("deleted message missing from store"))?;
        world.record(stored);
    }
    Ok(())
}

#[when("the message is hard deleted")]
fn hard_delete_message(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let result = run_async(world.service.hard_delete(id));
    world.record_outcome(result);
    Ok(())
}

#[when(r#"a message with blank content is created by "{author}""#)]
fn create_blank_message(world: &mut MessageWorld, author: String) {
    let result = run_async(
        world
            .service
            .create(CreateMessageRequest::new("   ", author)),
    );
    apply(world, result);
}
