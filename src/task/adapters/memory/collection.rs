//! Collection port implementation for the in-memory store.

use super::{InMemoryRepository, InMemoryState};
use crate::task::{
    domain::{Collection, CollectionId, PersistedCollectionData},
    ports::{CollectionRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;

/// Returns a copy of the stored collection with its current tasks attached.
fn with_tasks(state: &InMemoryState, stored: &Collection) -> Collection {
    let tasks = state
        .ordered_tasks()
        .filter(|task| task.collection_id() == Some(stored.id()))
        .cloned()
        .collect();

    Collection::from_persisted(PersistedCollectionData {
        id: stored.id(),
        name: stored.name().clone(),
        tasks,
        created_at: stored.created_at(),
        updated_at: stored.updated_at(),
    })
}

#[async_trait]
impl CollectionRepository for InMemoryRepository {
    async fn create(&self, collection: &Collection) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.collections.contains_key(&collection.id()) {
            return Err(TaskRepositoryError::DuplicateCollection(collection.id()));
        }

        state.collection_order.push(collection.id());
        state.collections.insert(collection.id(), collection.clone());
        Ok(())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Collection>> {
        let state = self.read()?;
        Ok(state
            .collection_order
            .iter()
            .filter_map(|id| state.collections.get(id))
            .map(|stored| with_tasks(&state, stored))
            .collect())
    }

    async fn find_by_id(&self, id: CollectionId) -> TaskRepositoryResult<Option<Collection>> {
        let state = self.read()?;
        Ok(state
            .collections
            .get(&id)
            .map(|stored| with_tasks(&state, stored)))
    }

    async fn delete_by_id(&self, id: CollectionId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.collections.remove(&id).is_none() {
            return Ok(());
        }
        state.collection_order.retain(|existing| *existing != id);
        for task in state.tasks.values_mut() {
            if task.collection_id() == Some(id) {
                task.detach_from_collection();
            }
        }
        Ok(())
    }
}
