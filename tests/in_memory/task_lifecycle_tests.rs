//! In-memory integration tests for the task lifecycle.

use super::helpers::{Services, create_task, services};
use rstest::rstest;
use tasks_service::task::{
    domain::{TaskDescriptionInput, TaskField, TaskStatus},
    services::TaskLifecycleError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_round_trip(services: Services) -> Result<(), eyre::Report> {
    let created = create_task(
        &services,
        TaskDescriptionInput::titled("Plan sprint")
            .with_description("Collect estimates")
            .with_priority(6)
            .with_status("new"),
    )
    .await?;

    let patched = services
        .tasks
        .update_partial(
            created.id(),
            TaskDescriptionInput::default().with_priority(9),
        )
        .await?;
    eyre::ensure!(patched.description().priority().value() == 9, "priority not patched");
    eyre::ensure!(
        patched.description().title() == "Plan sprint",
        "title should be untouched"
    );

    let replaced = services
        .tasks
        .update_fully(
            created.id(),
            TaskDescriptionInput::titled("Plan retro").with_status("closed"),
        )
        .await?;
    eyre::ensure!(replaced.description().description().is_empty(), "description not reset");
    eyre::ensure!(
        replaced.description().status() == TaskStatus::Closed,
        "status not replaced"
    );

    services.tasks.delete_by_id(created.id()).await?;
    let remaining = services.tasks.list().await?;
    eyre::ensure!(remaining.is_empty(), "task should be gone");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn zero_values_in_a_partial_update_change_nothing(
    services: Services,
) -> Result<(), eyre::Report> {
    let created = create_task(
        &services,
        TaskDescriptionInput::titled("Stable")
            .with_description("Text")
            .with_priority(2)
            .with_status("active"),
    )
    .await?;

    let patched = services
        .tasks
        .update_partial(created.id(), TaskDescriptionInput::default())
        .await?;

    eyre::ensure!(
        patched.description() == created.description(),
        "description changed: {:?}",
        patched.description()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_update_leaves_the_task_unchanged(
    services: Services,
) -> Result<(), eyre::Report> {
    let created = create_task(&services, TaskDescriptionInput::titled("Untouched")).await?;

    let result = services
        .tasks
        .update_fully(
            created.id(),
            TaskDescriptionInput::titled("Fine").with_status("bogus"),
        )
        .await;
    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::Validation(ref err)) if err.field == TaskField::Status),
        "expected status validation error, got {result:?}"
    );

    let fetched = services.tasks.get_by_id(created.id()).await?;
    eyre::ensure!(fetched == created, "task was modified");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_are_all_stored(services: Services) -> Result<(), eyre::Report> {
    let mut handles = Vec::new();
    for index in 0..16 {
        let service = services.tasks.clone();
        handles.push(tokio::spawn(async move {
            service
                .create(tasks_service::task::services::CreateTaskRequest::new(
                    TaskDescriptionInput::titled(format!("task {index}")),
                ))
                .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let listed = services.tasks.list().await?;
    eyre::ensure!(listed.len() == 16, "expected 16 tasks, found {}", listed.len());
    Ok(())
}
