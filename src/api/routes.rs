//! Router assembly.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /v1/api/tasks | `create_task` |
//! | GET | /v1/api/tasks | `list_tasks` |
//! | GET | /v1/api/tasks/{id} | `get_task` |
//! | PUT | /v1/api/tasks/{id} | `replace_task` |
//! | PATCH | /v1/api/tasks/{id} | `patch_task` |
//! | DELETE | /v1/api/tasks/{id} | `delete_task` |
//! | POST | /v1/api/collections | `create_collection` |
//! | GET | /v1/api/collections | `list_collections` |
//! | GET | /v1/api/collections/{id} | `get_collection` |
//! | DELETE | /v1/api/collections/{id} | `delete_collection` |
//! | GET | /healthz | `liveness` |
//! | GET | /readyz | `readiness` |

use super::{
    AppState,
    auth::require_basic_auth,
    handlers::{
        collections::{create_collection, delete_collection, get_collection, list_collections},
        tasks::{create_task, delete_task, get_task, list_tasks, patch_task, replace_task},
    },
    probes::{liveness, readiness},
};
use crate::task::ports::TaskStore;
use axum::{Router, middleware, routing::get};
use mockable::Clock;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Base path of the versioned API.
pub const API_BASE_PATH: &str = "/v1/api";

/// Builds the application router.
///
/// Every route under [`API_BASE_PATH`] requires basic auth; the probes do
/// not.
pub fn create_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let api = Router::new()
        .route("/tasks", get(list_tasks::<R, C>).post(create_task::<R, C>))
        .route(
            "/tasks/{id}",
            get(get_task::<R, C>)
                .put(replace_task::<R, C>)
                .patch(patch_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route(
            "/collections",
            get(list_collections::<R, C>).post(create_collection::<R, C>),
        )
        .route(
            "/collections/{id}",
            get(get_collection::<R, C>).delete(delete_collection::<R, C>),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.credentials),
            require_basic_auth,
        ));

    Router::new()
        .nest(API_BASE_PATH, api)
        .route("/healthz", get(liveness))
        .route("/readyz", get(readiness::<R, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
