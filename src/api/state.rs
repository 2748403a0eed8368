//! Shared state handed to every handler.

use super::BasicCredentials;
use crate::task::{
    ports::TaskStore,
    services::{CollectionService, TaskLifecycleService},
};
use mockable::Clock;
use std::sync::Arc;

/// Services and collaborators shared by the router.
pub struct AppState<R, C>
where
    R: TaskStore,
    C: Clock + Send + Sync,
{
    /// Task orchestration service.
    pub tasks: TaskLifecycleService<R, C>,
    /// Collection orchestration service.
    pub collections: CollectionService<R, C>,
    /// Store handle used by the readiness probe.
    pub store: Arc<R>,
    /// Credentials accepted by the basic-auth gate.
    pub credentials: Arc<BasicCredentials>,
}

impl<R, C> AppState<R, C>
where
    R: TaskStore,
    C: Clock + Send + Sync,
{
    /// Wires both services onto one store and clock.
    #[must_use]
    pub fn new(store: Arc<R>, clock: Arc<C>, credentials: BasicCredentials) -> Self {
        Self {
            tasks: TaskLifecycleService::new(Arc::clone(&store), Arc::clone(&clock)),
            collections: CollectionService::new(Arc::clone(&store), clock),
            store,
            credentials: Arc::new(credentials),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            collections: self.collections.clone(),
            store: Arc::clone(&self.store),
            credentials: Arc::clone(&self.credentials),
        }
    }
}
