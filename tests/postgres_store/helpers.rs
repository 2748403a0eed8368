//! Shared helpers for `PostgreSQL` store integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use pg_embedded_setup_unpriv::TestCluster;
use std::num::NonZeroU32;
use tasks_service::task::adapters::postgres::{PostgresRepository, SCHEMA_SQL, build_pool};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "tasks_service_test_template";

/// Creates a runtime for driving the async store ports from sync tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> Result<Runtime, eyre::Report> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Ensures the template database exists with the schema applied.
fn ensure_template(cluster: &TestCluster) -> Result<(), eyre::Report> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(SCHEMA_SQL)
                .map_err(|e| eyre::eyre!("{e}"))?;
            Ok(())
        })
        .map_err(|e| eyre::eyre!("template setup failed: {e}"))
}

/// Store bound to a database cloned from the template.
///
/// The repository is dropped before the database, so the pool's connections
/// are closed when the drop runs.
pub struct TestDatabase {
    /// Store under test.
    pub repository: PostgresRepository,
    _cleanup: DropDatabase,
}

impl TestDatabase {
    /// Clones a fresh database from the migrated template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template, database, or pool cannot be created.
    pub fn create(cluster: &'static TestCluster) -> Result<Self, eyre::Report> {
        ensure_template(cluster)?;
        let name = format!("test_{}", Uuid::new_v4().simple());
        cluster
            .create_database_from_template(name.as_str(), TEMPLATE_DB)
            .map_err(|e| eyre::eyre!("create {name} failed: {e}"))?;
        let cleanup = DropDatabase { cluster, name };

        let url = cluster.connection().database_url(&cleanup.name);
        let pool = build_pool(&url, NonZeroU32::MIN)?;
        Ok(Self {
            repository: PostgresRepository::new(pool),
            _cleanup: cleanup,
        })
    }
}

struct DropDatabase {
    cluster: &'static TestCluster,
    name: String,
}

impl Drop for DropDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(self.name.as_str()));
    }
}
