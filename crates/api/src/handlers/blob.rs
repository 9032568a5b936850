//! Handlers for the `/blobs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::blob::{Blob, CreateBlob, UpdateBlob};
use portfolio_db::repositories::BlobRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Id, Payload};
use crate::negotiate::Format;
use crate::response::Deleted;
use crate::state::AppState;
use crate::views::{self, BlobEdit, BlobIndex, BlobNew, BlobShow};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Blob", id })
}

async fn find(state: &AppState, id: DbId) -> AppResult<Blob> {
    BlobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /blobs
pub async fn list(State(state): State<AppState>, format: Format) -> AppResult<Response> {
    let blobs = BlobRepo::list(&state.pool).await?;
    match format {
        Format::Html => views::render(&BlobIndex::new(&blobs)),
        Format::Json => Ok(Json(blobs).into_response()),
    }
}

/// POST /blobs
pub async fn create(
    State(state): State<AppState>,
    format: Format,
    Payload(input): Payload<CreateBlob>,
) -> AppResult<Response> {
    let blob = BlobRepo::create(&state.pool, &input).await?;
    tracing::info!(blob_id = blob.id, "Blob created");
    match format {
        Format::Html => Ok(Redirect::to("/blobs").into_response()),
        Format::Json => Ok((StatusCode::CREATED, Json(blob)).into_response()),
    }
}

/// GET /blobs/new
pub async fn new_form() -> AppResult<Response> {
    views::render(&BlobNew::default())
}

/// GET /blobs/{id}
pub async fn show(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
) -> AppResult<Response> {
    let blob = find(&state, id).await?;
    match format {
        Format::Html => views::render(&BlobShow::new(&blob)),
        Format::Json => Ok(Json(blob).into_response()),
    }
}

/// GET /blobs/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
) -> AppResult<Response> {
    let blob = find(&state, id).await?;
    match format {
        Format::Html => views::render(&BlobEdit::new(&blob)),
        Format::Json => Ok(Json(blob).into_response()),
    }
}

/// PUT /blobs/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
    Payload(input): Payload<UpdateBlob>,
) -> AppResult<Response> {
    let blob = BlobRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(blob_id = blob.id, "Blob updated");
    match format {
        Format::Html => Ok(Redirect::to(&format!("/blobs/{}", blob.id)).into_response()),
        Format::Json => Ok(Json(blob).into_response()),
    }
}

/// DELETE /blobs/{id}/edit
pub async fn delete(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
) -> AppResult<Response> {
    let blob = BlobRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(blob_id = blob.id, "Blob deleted");
    match format {
        Format::Html => Ok(Redirect::to("/blobs").into_response()),
        Format::Json => Ok(Json(Deleted::new(blob)).into_response()),
    }
}
