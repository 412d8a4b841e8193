//! JSON envelope shared by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Body of every response: a message and, on success, optional data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiBody<T> {
    /// Human-readable outcome.
    pub message: String,
    /// Payload, omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// A status code paired with an [`ApiBody`].
///
/// Building the value has no side effects; axum writes it out through
/// [`IntoResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: ApiBody<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            body: ApiBody {
                message: message.into(),
                data,
            },
        }
    }

    /// Creates a `200 OK` response carrying `data`.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, Some(data))
    }
}

impl ApiResponse<()> {
    /// Creates a response that carries only a message.
    #[must_use]
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
