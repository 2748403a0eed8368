//! Application services for task and collection orchestration.

mod collection;
mod lifecycle;

pub use collection::{CollectionService, CollectionServiceError, CollectionServiceResult};
pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
