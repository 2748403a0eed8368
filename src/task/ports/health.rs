//! Health-check port used by the readiness probe.

use super::TaskRepositoryResult;
use async_trait::async_trait;

/// Reports whether the backing store can serve requests.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Performs a cheap round trip to the store.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::Persistence`] when the store is
    /// unreachable.
    async fn ping(&self) -> TaskRepositoryResult<()>;
}
