//! Handlers for the task category endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tasktrack_core::error::CoreError;
use tasktrack_core::types::DbId;
use tasktrack_db::models::category::TaskCategoryDto;

use crate::error::{AppError, AppResult};
use crate::services::category::CategoryService;
use crate::state::AppState;

/// GET /categories/
///
/// List all categories.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryService::list(&state.pool).await?;

    Ok(Json(categories))
}

/// GET /categories/{id}
///
/// Fetch a single category.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TaskCategory",
            id,
        }))?;

    Ok(Json(category))
}

/// POST /categories/create
///
/// Create a category. Any client-supplied id is discarded so the database
/// assigns a fresh one.
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<TaskCategoryDto>,
) -> AppResult<impl IntoResponse> {
    input.category_id = None;
    let created = CategoryService::save(&state.pool, input).await?;

    tracing::info!(category_id = ?created.category_id, "Category created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /categories/update
///
/// Full-replacement update keyed by the id in the payload. A payload
/// without an id falls back to creating a fresh row, matching the save
/// semantics of the repository.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<TaskCategoryDto>,
) -> AppResult<impl IntoResponse> {
    let saved = CategoryService::save(&state.pool, input).await?;

    tracing::info!(category_id = ?saved.category_id, "Category updated");

    Ok((StatusCode::ACCEPTED, Json(saved)))
}

/// DELETE /categories/delete/{id}
///
/// Delete a category. Responds 200 with an empty body on success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CategoryService::delete(&state.pool, id).await?;

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::OK)
}
