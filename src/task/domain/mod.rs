//! Domain model for users and their tasks.
//!
//! Tasks belong to exactly one user by containment: a task is only reachable
//! through the task collection of the user that created it. The domain layer
//! validates task input and keeps infrastructure concerns outside of its
//! boundary.

mod error;
mod ids;
mod task;
mod user;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use task::{Task, TaskDetails, TaskDraft, TaskField, TaskPatch};
pub use user::User;
