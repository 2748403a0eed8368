//! Task status values.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current status of a task.
///
/// Statuses form a flat set: any status may be replaced by any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has just been recorded.
    New,
    /// Task is being worked on.
    Active,
    /// Task is finished.
    Closed,
    /// Task is parked. Used when no status is supplied.
    OnHold,
}

impl TaskStatus {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Closed => "closed",
            Self::OnHold => "on-hold",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "new" => Ok(Self::New),
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "on-hold" => Ok(Self::OnHold),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
