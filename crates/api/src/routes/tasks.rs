//! Route definitions for tasks.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /             -> list
/// GET    /{id}         -> get_by_id
/// POST   /create       -> create
/// PATCH  /update       -> update
/// DELETE /delete/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list))
        .route("/{id}", get(tasks::get_by_id))
        .route("/create", post(tasks::create))
        .route("/update", patch(tasks::update))
        .route("/delete/{id}", delete(tasks::delete))
}
