//! Handlers for the task endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasktrack_core::error::CoreError;
use tasktrack_core::types::DbId;
use tasktrack_db::models::task::TaskDto;

use crate::error::{AppError, AppResult};
use crate::services::task::TaskService;
use crate::state::AppState;

/// GET /tasks/
///
/// List all tasks.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = TaskService::list(&state.pool).await?;

    Ok(Json(tasks))
}

/// GET /tasks/{id}
///
/// Fetch a single task.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = TaskService::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    Ok(Json(task))
}

/// POST /tasks/create
///
/// Create a task. Any client-supplied id is discarded so the database
/// assigns a fresh one.
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<TaskDto>,
) -> AppResult<impl IntoResponse> {
    input.id = None;
    let created = TaskService::save(&state.pool, input).await?;

    tracing::info!(task_id = ?created.id, "Task created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /tasks/update
///
/// Full-replacement update keyed by the id in the payload. A payload
/// without an id falls back to creating a fresh row, matching the save
/// semantics of the repository.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<TaskDto>,
) -> AppResult<impl IntoResponse> {
    let saved = TaskService::save(&state.pool, input).await?;

    tracing::info!(task_id = ?saved.id, "Task updated");

    Ok((StatusCode::ACCEPTED, Json(saved)))
}

/// DELETE /tasks/delete/{id}
///
/// Delete a task. Responds 200 with an empty body on success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    TaskService::delete(&state.pool, id).await?;

    tracing::info!(task_id = id, "Task deleted");

    Ok(StatusCode::OK)
}
