//! Task port implementation for the in-memory store.

use super::InMemoryRepository;
use crate::task::{
    domain::{Task, TaskChangeset, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;

#[async_trait]
impl TaskRepository for InMemoryRepository {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        if let Some(collection_id) = task.collection_id()
            && !state.collections.contains_key(&collection_id)
        {
            return Err(TaskRepositoryError::UnknownCollection(collection_id));
        }

        state.task_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.ordered_tasks().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.remove(&id).is_some() {
            state.task_order.retain(|existing| *existing != id);
        }
        Ok(())
    }

    async fn update_fields(
        &self,
        id: TaskId,
        changes: &TaskChangeset,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if let Some(task) = state.tasks.get_mut(&id) {
            task.apply(changes);
        }
        Ok(())
    }
}
