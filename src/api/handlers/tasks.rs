//! Handlers for `/v1/api/tasks`.
//!
//! - `POST /tasks` creates a task (201)
//! - `GET /tasks` lists tasks
//! - `GET /tasks/{id}` fetches one task
//! - `PUT /tasks/{id}` replaces every description field
//! - `PATCH /tasks/{id}` overwrites only the supplied fields
//! - `DELETE /tasks/{id}` removes a task (204)
//!
//! An identifier that does not parse cannot name a stored task and is
//! answered with 404.

use crate::api::{AppState, ApiErrorResponse};
use crate::task::{
    domain::{Task, TaskDescriptionInput, TaskId},
    ports::TaskStore,
    services::CreateTaskRequest,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// `POST /tasks`.
///
/// # Errors
///
/// 400 for a malformed body or a rejected field, 422 for an unknown
/// collection.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<Task>)>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(request) = payload?;
    let task = state.tasks.create(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks`.
///
/// # Errors
///
/// 500 when the store fails.
pub async fn list_tasks<R, C>(State(state): State<AppState<R, C>>) -> HandlerResult<Json<Vec<Task>>>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.tasks.list().await?))
}

/// `GET /tasks/{id}`.
///
/// # Errors
///
/// 404 when no task has the identifier.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<Task>>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    Ok(Json(state.tasks.get_by_id(id).await?))
}

/// `DELETE /tasks/{id}`.
///
/// # Errors
///
/// 404 when no task has the identifier.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<StatusCode>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    state.tasks.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /tasks/{id}`.
///
/// # Errors
///
/// 404 for an unknown task, 400 for a malformed body or a rejected field.
pub async fn replace_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskDescriptionInput>, JsonRejection>,
) -> HandlerResult<Json<Task>>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let Json(input) = payload?;
    Ok(Json(state.tasks.update_fully(id, input).await?))
}

/// `PATCH /tasks/{id}`.
///
/// # Errors
///
/// 404 for an unknown task, 400 for a malformed body or a rejected field.
pub async fn patch_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskDescriptionInput>, JsonRejection>,
) -> HandlerResult<Json<Task>>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let Json(input) = payload?;
    Ok(Json(state.tasks.update_partial(id, input).await?))
}

fn parse_task_id(raw: &str) -> HandlerResult<TaskId> {
    raw.parse()
        .map_err(|_| ApiErrorResponse::not_found(format!("task not found: {raw}")))
}
