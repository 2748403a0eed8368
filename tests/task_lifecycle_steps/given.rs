//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasks_service::task::{domain::TaskDescriptionInput, services::CreateTaskRequest};

#[given(r#"a task titled "{title}" with priority {priority:i64}"#)]
fn pending_task(world: &mut TaskLifecycleWorld, title: String, priority: i64) {
    world.pending_input = Some(TaskDescriptionInput::titled(title).with_priority(priority));
}

#[given(r#"a stored task titled "{title}" with priority {priority:i64}"#)]
fn stored_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    priority: i64,
) -> Result<(), eyre::Report> {
    let input = TaskDescriptionInput::titled(title)
        .with_priority(priority)
        .with_status("active");
    let created = run_async(world.service.create(CreateTaskRequest::new(input)))
        .wrap_err("create task for scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}
