//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /new             -> new_form
/// GET    /{id}            -> show
/// GET    /edit/{id}       -> edit_form
/// PUT    /edit/{id}       -> update
/// DELETE /edit/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/new", get(project::new_form))
        .route("/{id}", get(project::show))
        .route(
            "/edit/{id}",
            get(project::edit_form)
                .put(project::update)
                .delete(project::delete),
        )
}
