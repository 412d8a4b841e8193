//! In-memory implementation of the task repository port.

use async_trait::async_trait;
use std::sync::Arc;

use super::store::{StoreError, TaskStore};
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch, User, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

impl From<StoreError> for TaskRepositoryError {
    fn from(err: StoreError) -> Self {
        Self::persistence(err)
    }
}

/// Task repository backed by a shared [`TaskStore`].
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    store: Arc<TaskStore>,
}

impl InMemoryTaskRepository {
    /// Creates a repository over an existing store.
    #[must_use]
    pub const fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new(Arc::new(TaskStore::new()))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create_user(&self) -> TaskRepositoryResult<User> {
        let user = User::new(UserId::generate());
        let commit = self.store.update_and_get(|state| {
            state.insert_user(user.clone());
            Ok::<_, TaskRepositoryError>(user)
        })?;
        Ok(commit.output)
    }

    async fn get_task(
        &self,
        user_id: &UserId,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let snapshot = self.store.snapshot()?;
        Ok(snapshot
            .user(user_id)
            .and_then(|user| user.task(task_id))
            .cloned())
    }

    async fn get_tasks_by_user(&self, user_id: &UserId) -> TaskRepositoryResult<Vec<Task>> {
        let snapshot = self.store.snapshot()?;
        let user = snapshot
            .user(user_id)
            .ok_or_else(|| TaskRepositoryError::UserNotFound(user_id.clone()))?;
        Ok(user.tasks().to_vec())
    }

    async fn create_task(&self, user_id: &UserId, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let details = draft.validate()?;
        let commit = self.store.update_and_get(|state| {
            // An unknown user discards the allocation with the rest of the copy.
            let task_id = state.allocate_task_id();
            let user = state
                .user_mut(user_id)
                .ok_or_else(|| TaskRepositoryError::UserNotFound(user_id.clone()))?;
            let task = Task::new(task_id, details);
            user.push_task(task.clone());
            Ok::<_, TaskRepositoryError>(task)
        })?;
        Ok(commit.output)
    }

    async fn update_task(
        &self,
        user_id: &UserId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TaskRepositoryResult<Task> {
        let commit = self.store.update_and_get(|state| {
            let user = state
                .user_mut(user_id)
                .ok_or_else(|| TaskRepositoryError::UserNotFound(user_id.clone()))?;
            let task = user
                .task_mut(task_id)
                .ok_or_else(|| TaskRepositoryError::TaskNotFound {
                    user_id: user_id.clone(),
                    task_id,
                })?;
            task.apply(patch);
            Ok::<_, TaskRepositoryError>(task.clone())
        })?;
        Ok(commit.output)
    }

    async fn delete_task(&self, user_id: &UserId, task_id: TaskId) -> TaskRepositoryResult<TaskId> {
        let not_found = || TaskRepositoryError::TaskNotFound {
            user_id: user_id.clone(),
            task_id,
        };
        let commit = self.store.update_and_get(|state| {
            let removed = state
                .user_mut(user_id)
                .and_then(|user| user.remove_task(task_id))
                .ok_or_else(not_found)?;
            Ok::<_, TaskRepositoryError>(removed.id())
        })?;
        Ok(commit.output)
    }
}
