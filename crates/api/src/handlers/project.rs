//! Handlers for the `/projects` resource.
//!
//! Database failures while writing a project are answered with a plain-text
//! message instead of the generic error body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::project::{CreateProject, Project, UpdateProject};
use portfolio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Id, Payload};
use crate::negotiate::Format;
use crate::response::Deleted;
use crate::state::AppState;
use crate::views::{self, ProjectEdit, ProjectIndex, ProjectNew, ProjectShow};

pub const ADD_FAILED: &str = "There was a problem adding the information to the database.";
pub const UPDATE_FAILED: &str = "There was a problem updating the information to the database.";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

async fn find(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /projects
pub async fn list(State(state): State<AppState>, format: Format) -> AppResult<Response> {
    let projects = ProjectRepo::list(&state.pool).await?;
    match format {
        Format::Html => views::render(&ProjectIndex::new(&projects)),
        Format::Json => Ok(Json(projects).into_response()),
    }
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    format: Format,
    Payload(input): Payload<CreateProject>,
) -> AppResult<Response> {
    let project = ProjectRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Failed to create project");
            AppError::WriteFailed(ADD_FAILED)
        })?;
    tracing::info!(project_id = project.id, "Project created");
    match format {
        Format::Html => Ok(Redirect::to("/projects").into_response()),
        Format::Json => Ok((StatusCode::CREATED, Json(project)).into_response()),
    }
}

/// GET /projects/new
pub async fn new_form() -> AppResult<Response> {
    views::render(&ProjectNew::default())
}

/// GET /projects/{id}
pub async fn show(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
) -> AppResult<Response> {
    let project = find(&state, id).await?;
    match format {
        Format::Html => views::render(&ProjectShow::new(&project)),
        Format::Json => Ok(Json(project).into_response()),
    }
}

/// GET /projects/edit/{id}
pub async fn edit_form(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
) -> AppResult<Response> {
    let project = find(&state, id).await?;
    match format {
        Format::Html => views::render(&ProjectEdit::new(&project)),
        Format::Json => Ok(Json(project).into_response()),
    }
}

/// PUT /projects/edit/{id}
pub async fn update(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
    Payload(input): Payload<UpdateProject>,
) -> AppResult<Response> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, project_id = id, "Failed to update project");
            AppError::WriteFailed(UPDATE_FAILED)
        })?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = project.id, "Project updated");
    match format {
        Format::Html => Ok(Redirect::to("/projects").into_response()),
        Format::Json => Ok(Json(project).into_response()),
    }
}

/// DELETE /projects/edit/{id}
pub async fn delete(
    State(state): State<AppState>,
    format: Format,
    Id(id): Id,
) -> AppResult<Response> {
    let project = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = project.id, "Project deleted");
    match format {
        Format::Html => Ok(Redirect::to("/projects").into_response()),
        Format::Json => Ok(Json(Deleted::new(project)).into_response()),
    }
}
