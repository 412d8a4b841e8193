//! Mapping from request and repository failures to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use super::ApiResponse;
use crate::task::{
    domain::ParseTaskIdError,
    ports::{ErrorKind, TaskRepositoryError},
};

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The task identifier in the path is not a number.
    #[error(transparent)]
    InvalidTaskId(#[from] ParseTaskIdError),

    /// The repository rejected the operation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl ApiError {
    /// Returns the status code reported to the client.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::InvalidTaskId(_) => StatusCode::BAD_REQUEST,
            Self::Repository(err) => match err.kind() {
                ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Returns the message reported to the client.
    ///
    /// Internal failures are reported without detail.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidBody(_) | Self::Repository(TaskRepositoryError::InvalidTask(_)) => {
                "Invalid Task".to_owned()
            }
            Self::InvalidTaskId(_) => "Invalid Task ID".to_owned(),
            Self::Repository(TaskRepositoryError::UserNotFound(_)) => "User not found".to_owned(),
            Self::Repository(TaskRepositoryError::TaskNotFound { user_id, task_id }) => {
                format!("Task {task_id} not found for user {user_id}")
            }
            Self::Repository(TaskRepositoryError::Persistence(_)) => {
                "Internal Server Error".to_owned()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        ApiResponse::message(status, self.client_message()).into_response()
    }
}
