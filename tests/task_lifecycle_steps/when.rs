//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::when;
use tasks_service::task::{
    domain::{TaskDescriptionInput, TaskId},
    services::CreateTaskRequest,
};

#[when("the task is created")]
fn create_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let input = world
        .pending_input
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending input in scenario world"))?;
    let result = run_async(world.service.create(CreateTaskRequest::new(input)));
    world.record(result);
    Ok(())
}

#[when(r#"the task status is patched to "{status}""#)]
fn patch_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let result = run_async(
        world
            .service
            .update_partial(id, TaskDescriptionInput::default().with_status(status)),
    );
    world.record(result);
    Ok(())
}

#[when(r#"the task is replaced with title "{title}""#)]
fn replace_task(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let result = run_async(
        world
            .service
            .update_fully(id, TaskDescriptionInput::titled(title)),
    );
    world.record(result);
    Ok(())
}

#[when("an unknown task is deleted")]
fn delete_unknown(world: &mut TaskLifecycleWorld) {
    let id = TaskId::new();
    let result = run_async(async {
        world.service.delete_by_id(id).await?;
        world.service.get_by_id(id).await
    });
    world.record(result);
}
