//! User and task management for taskboard.
//!
//! Users own ordered task collections held by an in-memory store. The
//! repository enforces that tasks are only created for existing users, that
//! every task is addressed through its owner, and that each mutation is one
//! atomic update of the store. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
