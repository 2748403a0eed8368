//! Service layer for task creation, lookup, update, and deletion.

use crate::task::{
    domain::{
        CollectionId, FieldValidationError, Task, TaskChangeset, TaskDescriptionInput, TaskField,
        TaskId,
    },
    ports::{TaskRepository, TaskRepositoryError},
    validation::{
        validate_all, validate_description, validate_priority, validate_status, validate_title,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(flatten)]
    description: TaskDescriptionInput,
    #[serde(default)]
    collection_id: Option<CollectionId>,
}

impl CreateTaskRequest {
    /// Creates a request for a standalone task.
    #[must_use]
    pub fn new(description: TaskDescriptionInput) -> Self {
        Self {
            description,
            collection_id: None,
        }
    }

    /// Places the task in an existing collection.
    #[must_use]
    pub const fn in_collection(mut self, collection_id: CollectionId) -> Self {
        self.collection_id = Some(collection_id);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input failed a validation rule.
    #[error(transparent)]
    Validation(#[from] FieldValidationError),
    /// The addressed task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task orchestration service.
///
/// Every mutation first confirms that the target task exists, so a missing
/// task is reported as [`TaskLifecycleError::NotFound`] without the store's
/// mutating call ever being made.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates the description and stores a new task with a fresh
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the description is
    /// rejected or [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            description: input,
            collection_id,
        } = request;

        let description = validate_all(&input)?;
        let task = Task::new(description, collection_id, &*self.clock);
        info!(task_id = %task.id(), "creating task");
        self.repository.create(&task).await?;
        Ok(task)
    }

    /// Lists every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        debug!("listing all tasks");
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// identifier.
    pub async fn get_by_id(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        debug!(task_id = %id, "getting task");
        self.require_existing(id).await
    }

    /// Deletes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// identifier; the store's delete is not called in that case.
    pub async fn delete_by_id(&self, id: TaskId) -> TaskLifecycleResult<()> {
        info!(task_id = %id, "deleting task");
        self.require_existing(id).await?;
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Replaces every description field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task and
    /// [`TaskLifecycleError::Validation`] when the description is rejected.
    /// Nothing is written in either case.
    pub async fn update_fully(
        &self,
        id: TaskId,
        input: TaskDescriptionInput,
    ) -> TaskLifecycleResult<Task> {
        info!(task_id = %id, "updating task fully");
        self.require_existing(id).await?;
        let description = validate_all(&input)?;
        let changes = TaskChangeset::overwrite(&description, self.clock.utc());
        self.apply(id, &changes).await
    }

    /// Overwrites only the non-zero fields of `input` on an existing task.
    ///
    /// Empty strings and a zero priority mean "leave unchanged", so a partial
    /// update cannot reset a field to its zero value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for an unknown task and
    /// [`TaskLifecycleError::Validation`] when a supplied field is rejected.
    /// Nothing is written in either case.
    pub async fn update_partial(
        &self,
        id: TaskId,
        input: TaskDescriptionInput,
    ) -> TaskLifecycleResult<Task> {
        info!(task_id = %id, "updating task partially");
        self.require_existing(id).await?;
        let changes = partial_changeset(&input, self.clock.utc())?;
        if changes.is_empty() {
            debug!(task_id = %id, "partial update carries no fields, refreshing timestamp only");
        }
        self.apply(id, &changes).await
    }

    async fn apply(&self, id: TaskId, changes: &TaskChangeset) -> TaskLifecycleResult<Task> {
        self.repository.update_fields(id, changes).await?;
        self.require_existing(id).await
    }

    async fn require_existing(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }
}

/// Builds a changeset holding only the supplied, individually validated
/// fields.
fn partial_changeset(
    input: &TaskDescriptionInput,
    updated_at: DateTime<Utc>,
) -> Result<TaskChangeset, FieldValidationError> {
    let mut changes = TaskChangeset::touch(updated_at);

    if !input.title.is_empty() {
        validate_title(&input.title)
            .map_err(|err| FieldValidationError::new(TaskField::Title, err))?;
        changes.title = Some(input.title.clone());
    }
    if !input.description.is_empty() {
        validate_description(&input.description)
            .map_err(|err| FieldValidationError::new(TaskField::Description, err))?;
        changes.description = Some(input.description.clone());
    }
    if input.priority != 0 {
        let priority = validate_priority(input.priority)
            .map_err(|err| FieldValidationError::new(TaskField::Priority, err))?;
        changes.priority = Some(priority);
    }
    if !input.status.is_empty() {
        let status = validate_status(&input.status)
            .map_err(|err| FieldValidationError::new(TaskField::Status, err))?;
        changes.status = Some(status);
    }

    Ok(changes)
}
