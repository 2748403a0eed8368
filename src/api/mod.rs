//! HTTP delivery layer.
//!
//! Exposes the task and collection services over JSON under `/v1/api`,
//! guarded by shared-credential basic auth, plus unauthenticated liveness and
//! readiness probes.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod probes;
pub mod routes;
mod state;

pub use auth::BasicCredentials;
pub use error::{ApiError, ApiErrorResponse};
pub use routes::create_router;
pub use state::AppState;
