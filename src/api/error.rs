//! JSON error bodies and the mapping from service errors to status codes.

use crate::task::{
    ports::TaskRepositoryError,
    services::{CollectionServiceError, TaskLifecycleError},
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Offending field for validation failures.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<String>,
}

impl ApiError {
    /// Creates an error body without a field.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Creates a validation error body naming the rejected field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_owned(),
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

/// Status code paired with an [`ApiError`] body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// 404 for an unknown or unparseable identifier.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
    }

    /// 400 for a body that could not be decoded.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiError::new("MALFORMED_REQUEST", message),
        )
    }

    /// 500 with a generic message.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", "internal server error"),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed(rejection.body_text())
    }
}

impl From<TaskRepositoryError> for ApiErrorResponse {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::UnknownCollection(id) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("UNKNOWN_COLLECTION", format!("collection not found: {id}")),
            ),
            other => {
                error!(error = %other, "store operation failed");
                Self::internal()
            }
        }
    }
}

impl From<TaskLifecycleError> for ApiErrorResponse {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Validation(failure) => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation(failure.field.as_str(), failure.reason.to_string()),
            ),
            TaskLifecycleError::NotFound(id) => Self::not_found(format!("task not found: {id}")),
            TaskLifecycleError::Repository(inner) => inner.into(),
        }
    }
}

impl From<CollectionServiceError> for ApiErrorResponse {
    fn from(err: CollectionServiceError) -> Self {
        match err {
            CollectionServiceError::Domain(failure) => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation("name", failure.to_string()),
            ),
            CollectionServiceError::NotFound(id) => {
                Self::not_found(format!("collection not found: {id}"))
            }
            CollectionServiceError::Repository(inner) => inner.into(),
        }
    }
}
