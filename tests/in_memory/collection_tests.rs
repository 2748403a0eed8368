//! In-memory integration tests for collections.

use super::helpers::{Services, services};
use rstest::rstest;
use tasks_service::task::{
    domain::{CollectionId, TaskDescriptionInput},
    ports::TaskRepositoryError,
    services::{CollectionServiceError, CreateTaskRequest, TaskLifecycleError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collections_list_in_creation_order(services: Services) -> Result<(), eyre::Report> {
    let home = services.collections.create("Home").await?;
    let work = services.collections.create("Work").await?;

    let listed = services.collections.list().await?;
    let ids: Vec<CollectionId> = listed.iter().map(|collection| collection.id()).collect();

    eyre::ensure!(ids == vec![home.id(), work.id()], "unexpected order: {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_follow_their_collection(services: Services) -> Result<(), eyre::Report> {
    let work = services.collections.create("Work").await?;
    let first = services
        .tasks
        .create(CreateTaskRequest::new(TaskDescriptionInput::titled("one")).in_collection(work.id()))
        .await?;
    let second = services
        .tasks
        .create(CreateTaskRequest::new(TaskDescriptionInput::titled("two")).in_collection(work.id()))
        .await?;

    let fetched = services.collections.get_by_id(work.id()).await?;
    eyre::ensure!(
        fetched.tasks() == [first.clone(), second],
        "collection should list both tasks in order"
    );

    services.tasks.delete_by_id(first.id()).await?;
    let after_delete = services.collections.get_by_id(work.id()).await?;
    eyre::ensure!(after_delete.tasks().len() == 1, "deleted task still listed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_cannot_join_a_deleted_collection(services: Services) -> Result<(), eyre::Report> {
    let gone = services.collections.create("Gone").await?;
    services.collections.delete_by_id(gone.id()).await?;

    let result = services
        .tasks
        .create(CreateTaskRequest::new(TaskDescriptionInput::titled("late")).in_collection(gone.id()))
        .await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Repository(TaskRepositoryError::UnknownCollection(_)))
        ),
        "expected unknown collection, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_collection_is_not_found(services: Services) -> Result<(), eyre::Report> {
    let result = services.collections.get_by_id(CollectionId::new()).await;
    eyre::ensure!(
        matches!(result, Err(CollectionServiceError::NotFound(_))),
        "expected not found, got {result:?}"
    );
    Ok(())
}
