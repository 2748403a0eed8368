//! Service layer for collection creation, lookup, and deletion.
//!
//! Collections have no update operations and no validation beyond their
//! name.

use crate::task::{
    domain::{Collection, CollectionDomainError, CollectionId, CollectionName},
    ports::{CollectionRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for collection operations.
#[derive(Debug, Error)]
pub enum CollectionServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CollectionDomainError),
    /// The addressed collection does not exist.
    #[error("collection not found: {0}")]
    NotFound(CollectionId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for collection service operations.
pub type CollectionServiceResult<T> = Result<T, CollectionServiceError>;

/// Collection orchestration service.
pub struct CollectionService<R, C>
where
    R: CollectionRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for CollectionService<R, C>
where
    R: CollectionRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> CollectionService<R, C>
where
    R: CollectionRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new collection service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionServiceError::Domain`] when the name is rejected or
    /// [`CollectionServiceError::Repository`] when the store fails.
    pub async fn create(
        &self,
        raw_name: impl Into<String>,
    ) -> CollectionServiceResult<Collection> {
        let name = CollectionName::new(raw_name)?;
        let collection = Collection::new(name, &*self.clock);
        info!(collection_id = %collection.id(), "creating collection");
        self.repository.create(&collection).await?;
        Ok(collection)
    }

    /// Lists every collection with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionServiceError::Repository`] when the store fails.
    pub async fn list(&self) -> CollectionServiceResult<Vec<Collection>> {
        debug!("listing collections");
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a collection by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionServiceError::NotFound`] when no collection has the
    /// identifier.
    pub async fn get_by_id(&self, id: CollectionId) -> CollectionServiceResult<Collection> {
        debug!(collection_id = %id, "getting collection");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CollectionServiceError::NotFound(id))
    }

    /// Deletes an existing collection, detaching its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionServiceError::NotFound`] when no collection has the
    /// identifier; the store's delete is not called in that case.
    pub async fn delete_by_id(&self, id: CollectionId) -> CollectionServiceResult<()> {
        info!(collection_id = %id, "deleting collection");
        self.get_by_id(id).await?;
        self.repository.delete_by_id(id).await?;
        Ok(())
    }
}
