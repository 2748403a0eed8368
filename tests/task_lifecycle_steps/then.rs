//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use tasks_service::task::{domain::TaskStatus, services::TaskLifecycleError};

#[then("the task can be fetched by its identifier")]
fn task_is_fetchable(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let fetched = run_async(world.service.get_by_id(task.id()))?;
    eyre::ensure!(&fetched == task, "fetched task differs from created task");
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.task()?.description().status();
    eyre::ensure!(actual == expected, "expected status {expected}, found {actual}");
    Ok(())
}

#[then("the task priority is {priority:u8}")]
fn task_priority_is(world: &TaskLifecycleWorld, priority: u8) -> Result<(), eyre::Report> {
    let actual = world.task()?.description().priority().value();
    eyre::ensure!(actual == priority, "expected priority {priority}, found {actual}");
    Ok(())
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.description().title();
    eyre::ensure!(actual == title, "expected title {title}, found {actual}");
    Ok(())
}

#[then(r#"the request fails validation on "{field}""#)]
fn fails_validation(world: &TaskLifecycleWorld, field: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    match result {
        Err(TaskLifecycleError::Validation(err)) if err.field.as_str() == field => Ok(()),
        other => Err(eyre::eyre!(
            "expected validation error on {field}, got {other:?}"
        )),
    }
}

#[then("the request fails with not found")]
fn fails_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(result, Err(TaskLifecycleError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}
