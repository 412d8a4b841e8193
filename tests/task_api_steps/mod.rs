//! Step definitions for task API behaviour scenarios.

pub mod then;
pub mod world;
