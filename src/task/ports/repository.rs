//! Repository port for user and task management.

use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// User and task CRUD contract consumed by the HTTP layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Creates a user with a fresh identifier and no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] only when the backing
    /// store is unusable.
    async fn create_user(&self) -> TaskRepositoryResult<User>;

    /// Finds a task owned by the given user.
    ///
    /// Returns `None` when the user does not exist or owns no task with the
    /// identifier.
    async fn get_task(&self, user_id: &UserId, task_id: TaskId)
    -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks owned by the user in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UserNotFound`] when the user does not
    /// exist.
    async fn get_tasks_by_user(&self, user_id: &UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Validates the draft and appends a new task to the user's collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::InvalidTask`] when a field is absent or
    /// empty, and [`TaskRepositoryError::UserNotFound`] when the user does
    /// not exist. Neither failure changes stored state.
    async fn create_task(&self, user_id: &UserId, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Merges the supplied fields into an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UserNotFound`] when the user does not
    /// exist and [`TaskRepositoryError::TaskNotFound`] when the user owns no
    /// task with the identifier.
    async fn update_task(
        &self,
        user_id: &UserId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TaskRepositoryResult<Task>;

    /// Removes a task and returns the identifier of the removed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::TaskNotFound`] when the user does not
    /// exist or owns no task with the identifier.
    async fn delete_task(&self, user_id: &UserId, task_id: TaskId) -> TaskRepositoryResult<TaskId>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task input failed validation.
    #[error("invalid task: {0}")]
    InvalidTask(#[from] TaskDomainError),

    /// The user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The user owns no task with the identifier.
    #[error("task {task_id} not found for user {user_id}")]
    TaskNotFound {
        /// User whose collection was searched.
        user_id: UserId,
        /// Identifier that was not found.
        task_id: TaskId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error for callers that map failures to responses.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTask(_) => ErrorKind::InvalidInput,
            Self::UserNotFound(_) | Self::TaskNotFound { .. } => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}

/// Broad classification of repository failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied invalid input.
    InvalidInput,
    /// The addressed user or task does not exist.
    NotFound,
    /// The repository could not complete the operation.
    Internal,
}
