//! HTTP interface for the task repository.
//!
//! Routes translate requests into [`TaskRepository`] calls and render results
//! through [`ApiResponse`]. Every response body is a JSON object with a
//! `message` and, on success, a `data` payload.

mod error;
pub mod handlers;
mod response;


pub use error::ApiError;
pub use response::{ApiBody, ApiResponse};

use axum::{
    Router,
    routing::{get, post},
};
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::task::ports::TaskRepository;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Creates state around a repository implementation.
    #[must_use]
    pub const fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Returns the repository used by handlers.
    #[must_use]
    pub fn repository(&self) -> &dyn TaskRepository {
        self.repository.as_ref()
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(handlers::create_user))
        .route(
            "/users/{user_id}/tasks",
            post(handlers::create_task).get(handlers::list_tasks),
        )
        .route(
            "/users/{user_id}/tasks/{task_id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error when the listener address cannot be read or the server
/// fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "listening for requests");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
