//! Error types for task domain validation and parsing.

use super::TaskField;
use thiserror::Error;

/// Reasons a single task field can fail validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// A mandatory field was empty.
    #[error("field cannot be empty")]
    EmptyField,

    /// The field exceeds its character limit.
    #[error("field length is invalid: {actual} characters exceeds the limit of {max}")]
    InvalidLength {
        /// Maximum accepted number of characters.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The priority lies outside `0..=10`.
    #[error("invalid priority {0}, should be a value from 0 to 10")]
    OutOfRange(i64),

    /// The status is not one of the supported values.
    #[error("invalid status type '{0}'")]
    InvalidStatus(String),
}

/// Validation failure tagged with the field that caused it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct FieldValidationError {
    /// Field that failed validation.
    pub field: TaskField,
    /// Rule that rejected the field.
    pub reason: TaskValidationError,
}

impl FieldValidationError {
    /// Tags a rule failure with the offending field.
    #[must_use]
    pub const fn new(field: TaskField, reason: TaskValidationError) -> Self {
        Self { field, reason }
    }
}

/// Errors returned while constructing collection values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollectionDomainError {
    /// The collection name is empty after trimming.
    #[error("collection name must not be empty")]
    EmptyCollectionName,

    /// The collection name exceeds the 100-character storage limit.
    #[error("collection name exceeds 100 character limit: {0}")]
    CollectionNameTooLong(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
