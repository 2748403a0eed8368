//! Task entity and the sparse changeset used to update it.

use super::{CollectionId, Priority, TaskDescription, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task entity.
///
/// Serializes with the description fields inlined next to the identity and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    description: TaskDescription,
    collection_id: Option<CollectionId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description fields.
    pub description: TaskDescription,
    /// Owning collection, if any.
    pub collection_id: Option<CollectionId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh identifier.
    #[must_use]
    pub fn new(
        description: TaskDescription,
        collection_id: Option<CollectionId>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            description,
            collection_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            collection_id: data.collection_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the validated description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the owning collection, if any.
    #[must_use]
    pub const fn collection_id(&self) -> Option<CollectionId> {
        self.collection_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites the fields present in `changes`, leaving the rest intact.
    pub fn apply(&mut self, changes: &TaskChangeset) {
        let current = &self.description;
        self.description = TaskDescription::from_validated(
            changes
                .title
                .clone()
                .unwrap_or_else(|| current.title().to_owned()),
            changes
                .description
                .clone()
                .unwrap_or_else(|| current.description().to_owned()),
            changes.priority.unwrap_or(current.priority()),
            changes.status.unwrap_or(current.status()),
        );
        self.updated_at = changes.updated_at;
    }

    /// Detaches the task from its collection.
    pub const fn detach_from_collection(&mut self) {
        self.collection_id = None;
    }
}

/// Sparse set of field updates handed to the store.
///
/// `None` fields are never written. `updated_at` is always written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description text.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskChangeset {
    /// Creates a changeset that only refreshes the update timestamp.
    #[must_use]
    pub const fn touch(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            description: None,
            priority: None,
            status: None,
            updated_at,
        }
    }

    /// Creates a changeset overwriting every description field.
    #[must_use]
    pub fn overwrite(description: &TaskDescription, updated_at: DateTime<Utc>) -> Self {
        Self {
            title: Some(description.title().to_owned()),
            description: Some(description.description().to_owned()),
            priority: Some(description.priority()),
            status: Some(description.status()),
            updated_at,
        }
    }

    /// Returns `true` when no description field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}
