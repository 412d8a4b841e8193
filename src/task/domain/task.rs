//! Task record and the parameter objects used to create and edit it.

use super::{TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task name.
    Name,
    /// The free-form task status.
    Status,
    /// The task description.
    Description,
}

impl TaskField {
    /// Returns the field name as it appears in request bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Status => "status",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task owned by a user.
///
/// Tasks are addressable only through the user that contains them, so the
/// record carries no owner field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(rename = "task_id")]
    id: TaskId,
    name: String,
    status: String,
    description: String,
}

impl Task {
    /// Creates a task from an allocated identifier and validated details.
    #[must_use]
    pub fn new(id: TaskId, details: TaskDetails) -> Self {
        Self {
            id,
            name: details.name,
            status: details.status,
            description: details.description,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Merges the supplied fields of `patch` into this task.
    ///
    /// Fields absent from the patch keep their current values and the task
    /// identifier never changes.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Validated field values for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    name: String,
    status: String,
    description: String,
}

impl TaskDetails {
    /// Returns the validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the validated status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the validated description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Unvalidated request to create a task.
///
/// Every field is optional at this stage so that absent and empty values are
/// both reported through [`TaskDomainError`] instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl TaskDraft {
    /// Creates a draft with every field supplied.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
            description: Some(description.into()),
        }
    }

    /// Sets the task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the task status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Removes a field from the draft.
    #[must_use]
    pub fn without(mut self, field: TaskField) -> Self {
        match field {
            TaskField::Name => self.name = None,
            TaskField::Status => self.status = None,
            TaskField::Description => self.description = None,
        }
        self
    }

    /// Checks that every field is present and non-empty.
    ///
    /// Fields are checked in `name`, `status`, `description` order and the
    /// first failure is reported.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] when a field is absent and
    /// [`TaskDomainError::EmptyField`] when it is the empty string.
    pub fn validate(self) -> Result<TaskDetails, TaskDomainError> {
        Ok(TaskDetails {
            name: required(TaskField::Name, self.name)?,
            status: required(TaskField::Status, self.status)?,
            description: required(TaskField::Description, self.description)?,
        })
    }
}

fn required(field: TaskField, value: Option<String>) -> Result<String, TaskDomainError> {
    let text = value.ok_or(TaskDomainError::MissingField(field))?;
    if text.is_empty() {
        return Err(TaskDomainError::EmptyField(field));
    }
    Ok(text)
}

/// Partial update for an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl TaskPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the task status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` when the patch supplies no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.description.is_none()
    }
}
