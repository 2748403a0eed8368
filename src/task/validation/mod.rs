//! Field-level validation for task descriptions.
//!
//! Every rule is a pure function. [`validate_all`] runs them in a fixed order
//! (title, description, priority, status) and stops at the first failure,
//! reporting which field was rejected.

mod rules;

pub use rules::{
    MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, validate_description, validate_priority,
    validate_status, validate_title,
};

use crate::task::domain::{FieldValidationError, TaskDescription, TaskDescriptionInput, TaskField};

/// Validates a complete task description and normalizes it.
///
/// An empty status is normalized to `on-hold`.
///
/// # Errors
///
/// Returns the first [`FieldValidationError`] encountered.
pub fn validate_all(input: &TaskDescriptionInput) -> Result<TaskDescription, FieldValidationError> {
    validate_title(&input.title).map_err(|err| FieldValidationError::new(TaskField::Title, err))?;
    validate_description(&input.description)
        .map_err(|err| FieldValidationError::new(TaskField::Description, err))?;
    let priority = validate_priority(input.priority)
        .map_err(|err| FieldValidationError::new(TaskField::Priority, err))?;
    let status = validate_status(&input.status)
        .map_err(|err| FieldValidationError::new(TaskField::Status, err))?;

    Ok(TaskDescription::from_validated(
        input.title.clone(),
        input.description.clone(),
        priority,
        status,
    ))
}
