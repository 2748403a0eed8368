//! Liveness and readiness probes.

use super::AppState;
use crate::task::ports::TaskStore;
use axum::{Json, extract::State, http::StatusCode};
use mockable::Clock;
use serde::Serialize;
use tracing::warn;

/// Probe response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResponse {
    /// `ok` or `unavailable`.
    pub status: &'static str,
}

/// `GET /healthz`: the process is up.
pub async fn liveness() -> (StatusCode, Json<ProbeResponse>) {
    (StatusCode::OK, Json(ProbeResponse { status: "ok" }))
}

/// `GET /readyz`: the store answers a ping.
pub async fn readiness<R, C>(
    State(state): State<AppState<R, C>>,
) -> (StatusCode, Json<ProbeResponse>)
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(ProbeResponse { status: "ok" })),
        Err(err) => {
            warn!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeResponse {
                    status: "unavailable",
                }),
            )
        }
    }
}
