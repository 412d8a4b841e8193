//! Port contracts for user and task management.
//!
//! Ports define infrastructure-agnostic interfaces used by the HTTP layer.

pub mod repository;

#[cfg(test)]
pub use repository::MockTaskRepository;
pub use repository::{ErrorKind, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
