//! Shared world state for task API BDD scenarios.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::fixture;
use serde_json::Value;
use taskboard::{
    http::{AppState, router},
    task::adapters::memory::{InMemoryTaskRepository, TaskStore},
};
use tower::ServiceExt;

/// Scenario world for task API behaviour tests.
pub struct TaskApiWorld {
    pub app: Router,
    pub user_id: Option<String>,
    pub task_id: Option<u64>,
    pub last_status: Option<StatusCode>,
    pub last_body: Option<Value>,
}

impl TaskApiWorld {
    /// Creates a world around a fresh in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = InMemoryTaskRepository::new(Arc::new(TaskStore::new()));
        Self {
            app: router(AppState::new(Arc::new(repository))),
            user_id: None,
            task_id: None,
            last_status: None,
            last_body: None,
        }
    }

    /// Returns the user chosen by a given step.
    pub fn user_id(&self) -> Result<&str, eyre::Report> {
        self.user_id
            .as_deref()
            .ok_or_else(|| eyre::eyre!("missing user in scenario world"))
    }

    /// Returns the URI of the task created by a when step.
    pub fn task_uri(&self) -> Result<String, eyre::Report> {
        let task_id = self
            .task_id
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
        Ok(format!("/users/{}/tasks/{task_id}", self.user_id()?))
    }

    /// Sends a request and records the response in the world.
    pub fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, Value), eyre::Report> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(json)?))?,
            None => builder.body(Body::empty())?,
        };
        let app = self.app.clone();
        let (status, value) = run_async(async move {
            let response = app.oneshot(request).await?;
            let status = response.status();
            let bytes = response.into_body().collect().await?.to_bytes();
            Ok::<_, eyre::Report>((status, serde_json::from_slice::<Value>(&bytes)?))
        })?;
        self.last_status = Some(status);
        self.last_body = Some(value.clone());
        Ok((status, value))
    }
}

impl Default for TaskApiWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskApiWorld {
    TaskApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
