//! Domain model for task and collection management.
//!
//! The domain keeps validated task descriptions, identifiers, and the sparse
//! changeset used for updates free of any storage or transport concern.

mod collection;
mod description;
mod error;
mod ids;
mod status;
mod task;

pub use collection::{
    Collection, CollectionDescriptionInput, CollectionName, PersistedCollectionData,
};
pub use description::{TaskDescription, TaskDescriptionInput, TaskField};
pub use error::{
    CollectionDomainError, FieldValidationError, ParseTaskStatusError, TaskValidationError,
};
pub use ids::{CollectionId, Priority, TaskId};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskChangeset};
