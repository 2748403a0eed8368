//! Handlers for `/v1/api/collections`.

use crate::api::{AppState, ApiErrorResponse};
use crate::task::{
    domain::{Collection, CollectionDescriptionInput, CollectionId},
    ports::TaskStore,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// `POST /collections`.
///
/// # Errors
///
/// 400 for a malformed body or a rejected name.
pub async fn create_collection<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CollectionDescriptionInput>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<Collection>)>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(CollectionDescriptionInput { name }) = payload?;
    let collection = state.collections.create(name).await?;
    Ok((StatusCode::CREATED, Json(collection)))
}

/// `GET /collections`.
///
/// # Errors
///
/// 500 when the store fails.
pub async fn list_collections<R, C>(
    State(state): State<AppState<R, C>>,
) -> HandlerResult<Json<Vec<Collection>>>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(state.collections.list().await?))
}

/// `GET /collections/{id}`.
///
/// # Errors
///
/// 404 when no collection has the identifier.
pub async fn get_collection<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<Collection>>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_collection_id(&raw_id)?;
    Ok(Json(state.collections.get_by_id(id).await?))
}

/// `DELETE /collections/{id}`.
///
/// Tasks in the collection are kept and detached.
///
/// # Errors
///
/// 404 when no collection has the identifier.
pub async fn delete_collection<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> HandlerResult<StatusCode>
where
    R: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_collection_id(&raw_id)?;
    state.collections.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_collection_id(raw: &str) -> HandlerResult<CollectionId> {
    raw.parse()
        .map_err(|_| ApiErrorResponse::not_found(format!("collection not found: {raw}")))
}
