//! Collection port implementation for the `PostgreSQL` store.

use super::{
    models::{CollectionRow, NewCollectionRow, TaskRow},
    repository::PostgresRepository,
    schema::{collections, tasks},
    task::row_to_task,
};
use crate::task::{
    domain::{Collection, CollectionId, CollectionName, PersistedCollectionData, Task},
    ports::{CollectionRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;
use uuid::Uuid;

#[async_trait]
impl CollectionRepository for PostgresRepository {
    async fn create(&self, collection: &Collection) -> TaskRepositoryResult<()> {
        let collection_id = collection.id();
        let new_row = NewCollectionRow {
            id: collection_id.into_inner(),
            name: collection.name().as_str().to_owned(),
            created_at: collection.created_at(),
            updated_at: collection.updated_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(collections::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateCollection(collection_id)
                    }
                    other => TaskRepositoryError::persistence(other),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Collection>> {
        self.run_blocking(|connection| {
            let rows = collections::table
                .order((collections::created_at.asc(), collections::id.asc()))
                .select(CollectionRow::as_select())
                .load::<CollectionRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let mut grouped = load_grouped_tasks(connection)?;
            rows.into_iter()
                .map(|row| {
                    let owned = grouped.remove(&row.id).unwrap_or_default();
                    row_to_collection(row, owned)
                })
                .collect()
        })
        .await
    }

    async fn find_by_id(&self, id: CollectionId) -> TaskRepositoryResult<Option<Collection>> {
        self.run_blocking(move |connection| {
            let row = collections::table
                .filter(collections::id.eq(id.into_inner()))
                .select(CollectionRow::as_select())
                .first::<CollectionRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            let Some(found) = row else {
                return Ok(None);
            };

            let owned = tasks::table
                .filter(tasks::collection_id.eq(id.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<Task>>>()?;

            row_to_collection(found, owned).map(Some)
        })
        .await
    }

    async fn delete_by_id(&self, id: CollectionId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(collections::table.filter(collections::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

/// Loads every task that belongs to a collection, grouped by collection.
fn load_grouped_tasks(
    connection: &mut PgConnection,
) -> TaskRepositoryResult<HashMap<Uuid, Vec<Task>>> {
    let rows = tasks::table
        .filter(tasks::collection_id.is_not_null())
        .order((tasks::created_at.asc(), tasks::id.asc()))
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;

    let mut grouped: HashMap<Uuid, Vec<Task>> = HashMap::new();
    for row in rows {
        let Some(owner) = row.collection_id else {
            continue;
        };
        grouped.entry(owner).or_default().push(row_to_task(row)?);
    }
    Ok(grouped)
}

fn row_to_collection(row: CollectionRow, tasks: Vec<Task>) -> TaskRepositoryResult<Collection> {
    let CollectionRow {
        id,
        name: persisted_name,
        created_at,
        updated_at,
    } = row;
    let name = CollectionName::new(persisted_name).map_err(TaskRepositoryError::persistence)?;

    Ok(Collection::from_persisted(PersistedCollectionData {
        id: CollectionId::from_uuid(id),
        name,
        tasks,
        created_at,
        updated_at,
    }))
}
