//! Snapshot-based in-memory store holding every user and task.
//!
//! Readers receive an immutable [`StoreState`] snapshot. Writers apply a
//! transform to a private copy of the current state under the write lock and
//! the copy replaces the committed state only when the transform succeeds.
//! User records are shared between versions, so a copy only clones the
//! records its transform modifies.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::task::domain::{TaskId, User, UserId};

/// Errors raised by the store itself, independent of any transform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A writer panicked while holding the lock.
    #[error("task store lock poisoned: {0}")]
    Poisoned(String),
}

/// Committed contents of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    users: HashMap<UserId, Arc<User>>,
    last_task_id: u64,
}

impl StoreState {
    /// Finds a user by identifier.
    #[must_use]
    pub fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users.get(user_id).map(Arc::as_ref)
    }

    /// Finds a user by identifier for modification.
    ///
    /// A record still shared with a published snapshot is cloned first.
    pub fn user_mut(&mut self, user_id: &UserId) -> Option<&mut User> {
        self.users.get_mut(user_id).map(Arc::make_mut)
    }

    /// Inserts or replaces a user record.
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id().clone(), Arc::new(user));
    }

    /// Allocates the next task identifier.
    ///
    /// Identifiers start at 1 and are never reused within a store.
    pub const fn allocate_task_id(&mut self) -> TaskId {
        self.last_task_id = self.last_task_id.saturating_add(1);
        TaskId::new(self.last_task_id)
    }

    /// Returns the number of users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Returns the number of tasks across all users.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.users.values().map(|user| user.tasks().len()).sum()
    }
}

/// Result of a successful [`TaskStore::update_and_get`].
#[derive(Debug, Clone)]
pub struct Commit<T> {
    /// The state committed by the update.
    pub snapshot: Arc<StoreState>,
    /// The value produced by the transform.
    pub output: T,
}

/// Thread-safe holder of the committed [`StoreState`].
#[derive(Debug, Default)]
pub struct TaskStore {
    state: RwLock<Arc<StoreState>>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently committed state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] when the lock is poisoned.
    pub fn snapshot(&self) -> Result<Arc<StoreState>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|err| StoreError::Poisoned(err.to_string()))?;
        Ok(Arc::clone(&state))
    }

    /// Applies `transform` atomically and commits its changes on success.
    ///
    /// Concurrent updates are serialized. When `transform` returns an error
    /// the committed state is left untouched and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the transform's error, or a [`StoreError`] converted into `E`
    /// when the lock is poisoned.
    pub fn update_and_get<T, E, F>(&self, transform: F) -> Result<Commit<T>, E>
    where
        F: FnOnce(&mut StoreState) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut state = self
            .state
            .write()
            .map_err(|err| StoreError::Poisoned(err.to_string()))?;
        let mut next = StoreState::clone(&state);
        let output = transform(&mut next)?;
        let snapshot = Arc::new(next);
        *state = Arc::clone(&snapshot);
        Ok(Commit { snapshot, output })
    }
}
