//! Port contracts for task and collection persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the services. The
//! services never depend on a concrete storage technology.

pub mod health;
pub mod repository;

pub use health::StoreHealth;
pub use repository::{
    CollectionRepository, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};

#[cfg(test)]
pub use repository::{MockCollectionRepository, MockTaskRepository};

/// Complete storage backend: every repository port plus a health check.
pub trait TaskStore: TaskRepository + CollectionRepository + StoreHealth {}

impl<T> TaskStore for T where T: TaskRepository + CollectionRepository + StoreHealth {}
