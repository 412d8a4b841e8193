//! Request handlers for the user and task endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use tracing::info;

use super::{ApiError, ApiResponse, AppState};
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPatch, UserId},
    ports::TaskRepositoryError,
};

/// Payload returned when a user is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedUser {
    /// Identifier of the new user.
    pub user_id: UserId,
}

type HandlerResult<T> = Result<ApiResponse<T>, ApiError>;

fn task_path(user_id: String, task_id: &str) -> Result<(UserId, TaskId), ApiError> {
    Ok((UserId::new(user_id), task_id.parse()?))
}

/// `POST /users`
pub async fn create_user(State(state): State<AppState>) -> HandlerResult<CreatedUser> {
    let user = state.repository().create_user().await?;
    info!(user_id = %user.id(), "user created");
    Ok(ApiResponse::ok(
        "User Created",
        CreatedUser {
            user_id: user.id().clone(),
        },
    ))
}

/// `POST /users/{user_id}/tasks`
pub async fn create_task(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<TaskDraft>, JsonRejection>,
) -> HandlerResult<Task> {
    let Json(draft) = body?;
    let owner = UserId::new(user_id);
    let task = state.repository().create_task(&owner, draft).await?;
    info!(user_id = %owner, task_id = %task.id(), "task created");
    Ok(ApiResponse::ok("Task Created", task))
}

/// `GET /users/{user_id}/tasks`
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> HandlerResult<Vec<Task>> {
    let owner = UserId::new(user_id);
    let tasks = state.repository().get_tasks_by_user(&owner).await?;
    Ok(ApiResponse::ok("Tasks Retrieved", tasks))
}

/// `GET /users/{user_id}/tasks/{task_id}`
pub async fn get_task(
    State(state): State<AppState>,
    Path((user_id, raw_task_id)): Path<(String, String)>,
) -> HandlerResult<Task> {
    let (owner, task_id) = task_path(user_id, &raw_task_id)?;
    let task = state
        .repository()
        .get_task(&owner, task_id)
        .await?
        .ok_or(TaskRepositoryError::TaskNotFound {
            user_id: owner,
            task_id,
        })?;
    Ok(ApiResponse::ok("Task Found", task))
}

/// `PUT /users/{user_id}/tasks/{task_id}`
pub async fn update_task(
    State(state): State<AppState>,
    Path((user_id, raw_task_id)): Path<(String, String)>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> HandlerResult<Task> {
    let (owner, task_id) = task_path(user_id, &raw_task_id)?;
    let Json(patch) = body?;
    let task = state
        .repository()
        .update_task(&owner, task_id, patch)
        .await?;
    info!(user_id = %owner, task_id = %task_id, "task updated");
    Ok(ApiResponse::ok("Task Updated", task))
}

/// `DELETE /users/{user_id}/tasks/{task_id}`
pub async fn delete_task(
    State(state): State<AppState>,
    Path((user_id, raw_task_id)): Path<(String, String)>,
) -> HandlerResult<()> {
    let (owner, task_id) = task_path(user_id, &raw_task_id)?;
    let deleted = state.repository().delete_task(&owner, task_id).await?;
    info!(user_id = %owner, task_id = %deleted, "task deleted");
    Ok(ApiResponse::message(
        StatusCode::OK,
        format!("Task {deleted} deleted"),
    ))
}
