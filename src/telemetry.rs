//! Tracing subscriber setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "tasks_service=debug,tower_http=debug";

/// Installs the global fmt subscriber filtered by `RUST_LOG`.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
