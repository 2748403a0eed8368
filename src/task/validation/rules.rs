//! Individual validation rules for task fields.

use crate::task::domain::{Priority, TaskStatus, TaskValidationError};

/// Maximum number of characters in a task title.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum number of characters in a task description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validates a task title.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyField`] for an empty title or
/// [`TaskValidationError::InvalidLength`] when it exceeds
/// [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.is_empty() {
        return Err(TaskValidationError::EmptyField);
    }
    check_length(title, MAX_TITLE_LENGTH)
}

/// Validates a task description. Empty descriptions are accepted.
///
/// # Errors
///
/// Returns [`TaskValidationError::InvalidLength`] when the text exceeds
/// [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn validate_description(description: &str) -> Result<(), TaskValidationError> {
    check_length(description, MAX_DESCRIPTION_LENGTH)
}

/// Validates a raw priority.
///
/// # Errors
///
/// Returns [`TaskValidationError::OutOfRange`] when the value lies outside
/// `0..=10`.
pub fn validate_priority(priority: i64) -> Result<Priority, TaskValidationError> {
    Priority::new(priority)
}

/// Validates a raw status, defaulting an empty value to
/// [`TaskStatus::OnHold`].
///
/// # Errors
///
/// Returns [`TaskValidationError::InvalidStatus`] for any other value outside
/// the supported set.
pub fn validate_status(status: &str) -> Result<TaskStatus, TaskValidationError> {
    if status.is_empty() {
        return Ok(TaskStatus::OnHold);
    }
    TaskStatus::try_from(status).map_err(|err| TaskValidationError::InvalidStatus(err.0))
}

fn check_length(value: &str, max: usize) -> Result<(), TaskValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(TaskValidationError::InvalidLength { max, actual });
    }
    Ok(())
}
