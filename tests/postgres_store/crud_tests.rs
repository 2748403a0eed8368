//! Task and collection persistence against `PostgreSQL`.

use super::helpers::{TestDatabase, test_runtime};
use mockable::{Clock, DefaultClock};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use tasks_service::task::{
    adapters::postgres::PostgresRepository,
    domain::{
        Collection, CollectionId, CollectionName, Task, TaskChangeset, TaskDescriptionInput,
        TaskStatus,
    },
    ports::{CollectionRepository, StoreHealth, TaskRepository, TaskRepositoryError},
    validation::validate_all,
};

fn task(title: &str, collection_id: Option<CollectionId>) -> Result<Task, eyre::Report> {
    let description = validate_all(&TaskDescriptionInput::titled(title).with_priority(2))?;
    Ok(Task::new(description, collection_id, &DefaultClock))
}

#[rstest]
fn task_round_trip_and_partial_update(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), eyre::Report> {
    let db = TestDatabase::create(shared_test_cluster)?;
    test_runtime()?.block_on(round_trip(&db.repository))
}

async fn round_trip(store: &PostgresRepository) -> Result<(), eyre::Report> {
    store.ping().await?;

    let stored = task("persisted", None)?;
    TaskRepository::create(store, &stored).await?;

    let mut changes = TaskChangeset::touch(DefaultClock.utc());
    changes.status = Some(TaskStatus::Closed);
    TaskRepository::update_fields(store, stored.id(), &changes).await?;

    let fetched = TaskRepository::find_by_id(store, stored.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task not found"))?;
    eyre::ensure!(fetched.description().title() == "persisted", "title changed");
    eyre::ensure!(fetched.description().priority().value() == 2, "priority changed");
    eyre::ensure!(fetched.description().status() == TaskStatus::Closed, "status not written");

    let duplicate = TaskRepository::create(store, &stored).await;
    eyre::ensure!(
        matches!(duplicate, Err(TaskRepositoryError::DuplicateTask(_))),
        "expected duplicate error, got {duplicate:?}"
    );

    TaskRepository::delete_by_id(store, stored.id()).await?;
    eyre::ensure!(
        TaskRepository::find_by_id(store, stored.id()).await?.is_none(),
        "task survived delete"
    );
    Ok(())
}

#[rstest]
fn collection_delete_detaches_tasks(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), eyre::Report> {
    let db = TestDatabase::create(shared_test_cluster)?;
    test_runtime()?.block_on(detach_on_delete(&db.repository))
}

async fn detach_on_delete(store: &PostgresRepository) -> Result<(), eyre::Report> {
    let collection = Collection::new(CollectionName::new("Inbox")?, &DefaultClock);
    CollectionRepository::create(store, &collection).await?;
    let member = task("member", Some(collection.id()))?;
    TaskRepository::create(store, &member).await?;

    let fetched = CollectionRepository::find_by_id(store, collection.id())
        .await?
        .ok_or_else(|| eyre::eyre!("collection not found"))?;
    eyre::ensure!(fetched.tasks().len() == 1, "member not listed");

    CollectionRepository::delete_by_id(store, collection.id()).await?;
    let orphan = TaskRepository::find_by_id(store, member.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task removed with collection"))?;
    eyre::ensure!(orphan.collection_id().is_none(), "task still linked");
    Ok(())
}

#[rstest]
fn unknown_collection_is_rejected(
    shared_test_cluster: &'static TestCluster,
) -> Result<(), eyre::Report> {
    let db = TestDatabase::create(shared_test_cluster)?;
    let stray = task("stray", Some(CollectionId::new()))?;

    let result = test_runtime()?.block_on(TaskRepository::create(&db.repository, &stray));

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::UnknownCollection(_))),
        "expected unknown collection, got {result:?}"
    );
    Ok(())
}
