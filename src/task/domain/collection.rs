//! Collection entity and its validated name.

use super::{CollectionDomainError, CollectionId, Task};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a collection name, matching the `VARCHAR(100)` column.
const MAX_NAME_LENGTH: usize = 100;

/// Collection payload as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionDescriptionInput {
    /// Requested collection name.
    pub name: String,
}

/// Validated, trimmed collection name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a validated collection name.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionDomainError::EmptyCollectionName`] when the value is
    /// empty after trimming, or
    /// [`CollectionDomainError::CollectionNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CollectionDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(CollectionDomainError::EmptyCollectionName);
        }
        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(CollectionDomainError::CollectionNameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named grouping of tasks.
///
/// `tasks` lists the owned tasks in creation order whenever the collection is
/// read back from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    id: CollectionId,
    name: CollectionName,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCollectionData {
    /// Persisted collection identifier.
    pub id: CollectionId,
    /// Persisted name.
    pub name: CollectionName,
    /// Tasks owned by the collection.
    pub tasks: Vec<Task>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    /// Creates an empty collection with a fresh identifier.
    #[must_use]
    pub fn new(name: CollectionName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: CollectionId::new(),
            name,
            tasks: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a collection from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCollectionData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            tasks: data.tasks,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the collection identifier.
    #[must_use]
    pub const fn id(&self) -> CollectionId {
        self.id
    }

    /// Returns the collection name.
    #[must_use]
    pub const fn name(&self) -> &CollectionName {
        &self.name
    }

    /// Returns the owned tasks.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
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
}
