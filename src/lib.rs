//! Taskboard: an in-memory user and task REST service.
//!
//! Users are created with a generated identifier and own an ordered list of
//! tasks. Tasks are created, read, updated and deleted through their owner.
//! State lives in memory for the lifetime of the process.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Users, tasks and task validation with no infrastructure
//!   dependencies
//! - **Ports**: The [`task::ports::TaskRepository`] contract
//! - **Adapters**: The in-memory store and repository, plus the HTTP layer
//!
//! # Modules
//!
//! - [`task`]: Domain model, repository port and in-memory adapters
//! - [`http`]: Axum router, handlers and response envelope
//! - [`config`]: Server configuration
//! - [`telemetry`]: Logging setup

pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
