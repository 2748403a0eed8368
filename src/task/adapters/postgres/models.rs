//! Diesel row models for task and collection persistence.

use super::schema::{collections, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description text.
    pub description: String,
    /// Priority in `0..=10`.
    pub priority: i16,
    /// Task status.
    pub status: String,
    /// Owning collection, if any.
    pub collection_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description text.
    pub description: String,
    /// Priority in `0..=10`.
    pub priority: i16,
    /// Task status.
    pub status: String,
    /// Owning collection, if any.
    pub collection_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Sparse update model for task records. `None` columns are skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangesetRow {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description text.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<i16>,
    /// Replacement status.
    pub status: Option<String>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for collection records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = collections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CollectionRow {
    /// Collection identifier.
    pub id: uuid::Uuid,
    /// Collection name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for collection records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = collections)]
pub struct NewCollectionRow {
    /// Collection identifier.
    pub id: uuid::Uuid,
    /// Collection name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
