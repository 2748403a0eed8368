//! In-memory store for tests and database-free deployments.
//!
//! A single [`InMemoryRepository`] implements every port so tasks and
//! collections share one consistent state, the way one database would.

mod collection;
mod task;

use crate::task::{
    domain::{Collection, CollectionId, Task, TaskId},
    ports::{StoreHealth, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe in-memory task and collection store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    tasks: HashMap<TaskId, Task>,
    task_order: Vec<TaskId>,
    collections: HashMap<CollectionId, Collection>,
    collection_order: Vec<CollectionId>,
}

impl InMemoryState {
    fn ordered_tasks(&self) -> impl Iterator<Item = &Task> {
        self.task_order.iter().filter_map(|id| self.tasks.get(id))
    }
}

impl InMemoryRepository {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl StoreHealth for InMemoryRepository {
    async fn ping(&self) -> TaskRepositoryResult<()> {
        self.read().map(drop)
    }
}
