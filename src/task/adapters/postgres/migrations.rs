//! Schema bootstrap from the bundled SQL migration.

use super::repository::TaskPgPool;
use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};
use diesel::connection::SimpleConnection;

/// Idempotent SQL creating the `collections` and `tasks` tables.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-16-000000_create_collections_and_tasks/up.sql");

/// Applies [`SCHEMA_SQL`] using a pooled connection.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when no connection is
/// available or the statements fail.
pub async fn apply_schema(pool: &TaskPgPool) -> TaskRepositoryResult<()> {
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = owned_pool.get().map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(SCHEMA_SQL)
            .map_err(TaskRepositoryError::persistence)
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}
