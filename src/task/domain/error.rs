//! Error types for task domain validation and parsing.

use super::TaskField;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required task field was not supplied.
    #[error("task {0} is required")]
    MissingField(TaskField),

    /// A required task field is the empty string.
    #[error("task {0} must not be empty")]
    EmptyField(TaskField),
}

impl TaskDomainError {
    /// Returns the field that failed validation.
    #[must_use]
    pub const fn field(self) -> TaskField {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) => field,
        }
    }
}

/// Error returned while parsing a task identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(pub String);
