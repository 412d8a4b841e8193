//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryTaskRepository, TaskStore},
    domain::{TaskDraft, User},
    ports::TaskRepository,
};

/// Provides a fresh store shared by the repository fixture.
#[fixture]
pub fn store() -> Arc<TaskStore> {
    Arc::new(TaskStore::new())
}

/// Provides a repository over the `store` fixture.
#[fixture]
pub fn repo(store: Arc<TaskStore>) -> InMemoryTaskRepository {
    InMemoryTaskRepository::new(store)
}

/// Returns a draft with every field populated.
pub fn valid_draft(name: &str) -> TaskDraft {
    TaskDraft::new(name, "pending", format!("{name} description"))
}

/// Creates a user through the repository contract.
///
/// # Errors
///
/// Returns an error if the repository rejects user creation.
pub async fn create_user(repo: &impl TaskRepository) -> Result<User, eyre::Report> {
    repo.create_user()
        .await
        .map_err(|err| eyre::eyre!("create user: {err}"))
}
