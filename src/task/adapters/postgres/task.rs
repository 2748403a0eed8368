//! Task port implementation for the `PostgreSQL` store.

use super::{
    models::{NewTaskRow, TaskChangesetRow, TaskRow},
    repository::PostgresRepository,
    schema::tasks,
};
use crate::task::{
    domain::{
        CollectionId, PersistedTaskData, Priority, Task, TaskChangeset, TaskDescription, TaskId,
        TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

#[async_trait]
impl TaskRepository for PostgresRepository {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let collection_id = task.collection_id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_insert_error(err, task_id, collection_id))?;
            Ok(())
        })
        .await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn update_fields(
        &self,
        id: TaskId,
        changes: &TaskChangeset,
    ) -> TaskRepositoryResult<()> {
        let changeset = to_changeset_row(changes);
        self.run_blocking(move |connection| {
            diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn map_insert_error(
    err: DieselError,
    task_id: TaskId,
    collection_id: Option<CollectionId>,
) -> TaskRepositoryError {
    match (err, collection_id) {
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _), _) => {
            TaskRepositoryError::DuplicateTask(task_id)
        }
        (
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _),
            Some(collection),
        ) => TaskRepositoryError::UnknownCollection(collection),
        (other, _) => TaskRepositoryError::persistence(other),
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    let description = task.description();
    NewTaskRow {
        id: task.id().into_inner(),
        title: description.title().to_owned(),
        description: description.description().to_owned(),
        priority: i16::from(description.priority().value()),
        status: description.status().as_str().to_owned(),
        collection_id: task.collection_id().map(CollectionId::into_inner),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset_row(changes: &TaskChangeset) -> TaskChangesetRow {
    TaskChangesetRow {
        title: changes.title.clone(),
        description: changes.description.clone(),
        priority: changes.priority.map(|priority| i16::from(priority.value())),
        status: changes.status.map(|status| status.as_str().to_owned()),
        updated_at: changes.updated_at,
    }
}

pub(super) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        priority: persisted_priority,
        status: persisted_status,
        collection_id,
        created_at,
        updated_at,
    } = row;

    let priority =
        Priority::new(i64::from(persisted_priority)).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        description: TaskDescription::from_validated(title, description, priority, status),
        collection_id: collection_id.map(CollectionId::from_uuid),
        created_at,
        updated_at,
    }))
}
