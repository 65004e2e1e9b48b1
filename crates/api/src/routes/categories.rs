//! Route definitions for task categories.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
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
        .route("/", get(categories::list))
        .route("/{id}", get(categories::get_by_id))
        .route("/create", post(categories::create))
        .route("/update", patch(categories::update))
        .route("/delete/{id}", delete(categories::delete))
}
