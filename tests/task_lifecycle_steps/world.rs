//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasks_service::task::{
    adapters::memory::InMemoryRepository,
    domain::{Task, TaskDescriptionInput},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryRepository, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub pending_input: Option<TaskDescriptionInput>,
    pub current_task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            pending_input: None,
            current_task: None,
            last_result: None,
        }
    }

    /// Records an operation outcome, tracking the task on success.
    pub fn record(&mut self, result: Result<Task, TaskLifecycleError>) {
        if let Ok(ref task) = result {
            self.current_task = Some(task.clone());
        }
        self.last_result = Some(result);
    }

    /// Returns the task the scenario is working on.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
