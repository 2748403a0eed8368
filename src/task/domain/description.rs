//! User-supplied and validated task descriptions.

use super::{Priority, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task description exactly as a caller supplied it.
///
/// Missing fields decode to their zero value. Partial updates treat zero
/// values as "leave unchanged", so a caller cannot reset a field to its zero
/// value through a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDescriptionInput {
    /// Task title.
    pub title: String,
    /// Free-form task description.
    pub description: String,
    /// Requested priority, validated against `0..=10`.
    pub priority: i64,
    /// Requested status; empty means "not supplied".
    pub status: String,
}

impl TaskDescriptionInput {
    /// Creates an input with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the raw priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the raw status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Validated, normalized task description embedded in every [`super::Task`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDescription {
    title: String,
    description: String,
    priority: Priority,
    status: TaskStatus,
}

impl TaskDescription {
    /// Assembles a description from values that already passed validation.
    pub(crate) const fn from_validated(
        title: String,
        description: String,
        priority: Priority,
        status: TaskStatus,
    ) -> Self {
        Self {
            title,
            description,
            priority,
            status,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Names of the user-editable task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `priority` field.
    Priority,
    /// The `status` field.
    Status,
}

impl TaskField {
    /// Returns the field name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Priority => "priority",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
