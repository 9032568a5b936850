//! Route definitions for the `/blobs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blob;
use crate::state::AppState;

/// Routes mounted at `/blobs`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /new             -> new_form
/// GET    /{id}            -> show
/// GET    /{id}/edit       -> edit_form
/// PUT    /{id}/edit       -> update
/// DELETE /{id}/edit       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blob::list).post(blob::create))
        .route("/new", get(blob::new_form))
        .route("/{id}", get(blob::show))
        .route(
            "/{id}/edit",
            get(blob::edit_form).put(blob::update).delete(blob::delete),
        )
}
