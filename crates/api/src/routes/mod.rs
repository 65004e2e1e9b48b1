pub mod categories;
pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the server root.
///
/// Route hierarchy:
///
/// ```text
/// /categories/                 list
/// /categories/{id}             get
/// /categories/create           create (POST)
/// /categories/update           update (PATCH)
/// /categories/delete/{id}      delete
///
/// /tasks/                      list
/// /tasks/{id}                  get
/// /tasks/create                create (POST)
/// /tasks/update                update (PATCH)
/// /tasks/delete/{id}           delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories/", categories::router())
        .nest("/tasks/", tasks::router())
}
