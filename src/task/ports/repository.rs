//! Repository ports for task and collection persistence.

use crate::task::domain::{Collection, CollectionId, Task, TaskChangeset, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations carry no business rules. Mutations addressing an unknown
/// identifier succeed without effect; existence checks are the caller's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// already taken or [`TaskRepositoryError::UnknownCollection`] when the
    /// task names a collection that does not exist.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns every task ordered by creation time.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task by identifier.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Writes the fields present in `changes` to the task with the given
    /// identifier.
    async fn update_fields(&self, id: TaskId, changes: &TaskChangeset)
    -> TaskRepositoryResult<()>;
}

/// Collection persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Stores a new collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateCollection`] when the
    /// identifier is already taken.
    async fn create(&self, collection: &Collection) -> TaskRepositoryResult<()>;

    /// Returns every collection, each with its tasks, ordered by creation
    /// time.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Collection>>;

    /// Finds a collection and its tasks by identifier.
    ///
    /// Returns `None` when the collection does not exist.
    async fn find_by_id(&self, id: CollectionId) -> TaskRepositoryResult<Option<Collection>>;

    /// Deletes a collection. Its tasks remain and lose their association.
    async fn delete_by_id(&self, id: CollectionId) -> TaskRepositoryResult<()>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A collection with the same identifier already exists.
    #[error("duplicate collection identifier: {0}")]
    DuplicateCollection(CollectionId),

    /// The task references a collection that does not exist.
    #[error("unknown collection: {0}")]
    UnknownCollection(CollectionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
