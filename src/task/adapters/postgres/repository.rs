//! `PostgreSQL` repository shared by the task and collection ports.

use crate::task::ports::{StoreHealth, TaskRepositoryError, TaskRepositoryResult};
use async_trait::async_trait;
use diesel::RunQueryDsl;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::num::NonZeroU32;
use std::time::Duration;

/// `PostgreSQL` connection pool type used by the store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds a connection pool for the given libpq connection string.
///
/// Connection checkouts, store pings included, give up after five seconds.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the initial connections
/// cannot be established.
pub fn build_pool(
    connection_string: &str,
    max_size: NonZeroU32,
) -> TaskRepositoryResult<TaskPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(connection_string);
    Pool::builder()
        .max_size(max_size.get())
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)
        .map_err(TaskRepositoryError::persistence)
}

/// `PostgreSQL`-backed task and collection store.
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: TaskPgPool,
}

impl PostgresRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    pub(super) async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl StoreHealth for PostgresRepository {
    async fn ping(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query("SELECT 1")
                .execute(connection)
                .map(drop)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}
