pub mod blob;
pub mod health;
pub mod project;

use axum::extract::OriginalUri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      service and database health
///
/// /blobs                       list, create
/// /blobs/new                   new blob form
/// /blobs/{id}                  show
/// /blobs/{id}/edit             edit form, update, delete
///
/// /projects                    list, create
/// /projects/new                new project form
/// /projects/{id}               show
/// /projects/edit/{id}          edit form, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/blobs", blob::router())
        .nest("/projects", project::router())
        .fallback(unknown_route)
}

async fn unknown_route(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::UnknownRoute(uri.path().to_string())
}
