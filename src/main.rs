//! Entry point for the tasks service.
//!
//! Loads `.env`, installs tracing, reads configuration, connects the selected
//! store, and serves the router until interrupted.

use mockable::DefaultClock;
use std::process::ExitCode;
use std::sync::Arc;
use tasks_service::{
    api::{AppState, BasicCredentials, create_router},
    config::{AppConfig, ConfigError, StorageMode},
    task::{
        adapters::{
            memory::InMemoryRepository,
            postgres::{PostgresRepository, apply_schema, build_pool},
        },
        ports::{TaskRepositoryError, TaskStore},
    },
    telemetry,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to prepare store: {0}")]
    Store(#[from] TaskRepositoryError),
    #[error("failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    if telemetry::init_tracing().is_err() {
        warn!("tracing subscriber already installed");
    }
    if let Err(err) = dotenv
        && !err.not_found()
    {
        warn!(error = %err, "ignoring unreadable .env file");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "tasks service failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    let credentials = BasicCredentials::new(&config.auth.username, &config.auth.password);

    match config.storage_mode {
        StorageMode::Memory => {
            info!("using in-memory store");
            serve(&config, Arc::new(InMemoryRepository::new()), credentials).await
        }
        StorageMode::Postgres => {
            info!(
                host = %config.database.host,
                port = config.database.port,
                database = %config.database.name,
                "connecting to postgres"
            );
            let pool = build_pool(
                &config.database.connection_string(),
                config.database.pool_max_size,
            )?;
            apply_schema(&pool).await?;
            serve(&config, Arc::new(PostgresRepository::new(pool)), credentials).await
        }
    }
}

async fn serve<R>(
    config: &AppConfig,
    store: Arc<R>,
    credentials: BasicCredentials,
) -> Result<(), StartupError>
where
    R: TaskStore + 'static,
{
    let state = AppState::new(store, Arc::new(DefaultClock), credentials);
    let router = create_router(state);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
