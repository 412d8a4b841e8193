//! In-memory adapters for user and task state.
//!
//! [`TaskStore`] owns the committed state and serializes every write;
//! [`InMemoryTaskRepository`] implements the repository port on top of it.

mod repository;
mod store;

pub use repository::InMemoryTaskRepository;
pub use store::{Commit, StoreError, StoreState, TaskStore};
