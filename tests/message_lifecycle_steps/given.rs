//! Given steps for message lifecycle BDD scenarios.

use super::world::{MessageWorld, run_async};
use bulletin::message::services::CreateMessageRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a message "{content}" by "{author}" has been created"#)]
fn message_created(
    world: &mut MessageWorld,
    content: String,
    author: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(CreateMessageRequest::new(content, author)),
    )
    .wrap_err("create message for scenario setup")?;
    world.record(created);
    Ok(())
}

#[given("the message has been published")]
fn message_published(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let published =
        run_async(world.service.publish(id)).wrap_err("publish message in scenario setup")?;
    world.record(published);
    Ok(())
}

#[given("the message has been deleted")]
fn message_deleted(world: &mut MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    run_async(world.service.delete(id)).wrap_err("delete message in scenario setup")?;
    let stored = run_async(world.queries.get(id))
        .wrap_err("reload deleted message")?
        .ok_or_else(|| eyre::eyre!("deleted message missing from store"))?;
    world.record(stored);
    Ok(())
}
