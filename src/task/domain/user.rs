//! User record owning an ordered task collection.

use super::{Task, TaskId, UserId};
use serde::Serialize;

/// A user and the tasks it owns, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    user_id: UserId,
    tasks: Vec<Task>,
}

impl User {
    /// Creates a user with no tasks.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            tasks: Vec::new(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the owned tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds an owned task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Finds an owned task by identifier for in-place modification.
    pub fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }

    /// Appends a task to the end of the collection.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes an owned task, preserving the order of the remaining tasks.
    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == task_id)?;
        Some(self.tasks.remove(position))
    }
}
