//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use tasks_service::task::{
    adapters::memory::InMemoryRepository,
    domain::{Task, TaskDescriptionInput},
    services::{CollectionService, CreateTaskRequest, TaskLifecycleService},
};

/// Task service over the in-memory store.
pub type TaskService = TaskLifecycleService<InMemoryRepository, DefaultClock>;

/// Collection service over the in-memory store.
pub type Collections = CollectionService<InMemoryRepository, DefaultClock>;

/// Both services sharing one store.
pub struct Services {
    pub tasks: TaskService,
    pub collections: Collections,
}

/// Provides services wired to a fresh store.
#[fixture]
pub fn services() -> Services {
    let store = Arc::new(InMemoryRepository::new());
    let clock = Arc::new(DefaultClock);
    Services {
        tasks: TaskLifecycleService::new(Arc::clone(&store), Arc::clone(&clock)),
        collections: CollectionService::new(store, clock),
    }
}

/// Creates a standalone task.
///
/// # Errors
///
/// Returns an error if validation or the store rejects the task.
pub async fn create_task(
    services: &Services,
    input: TaskDescriptionInput,
) -> Result<Task, eyre::Report> {
    let task = services.tasks.create(CreateTaskRequest::new(input)).await?;
    Ok(task)
}
