//! Server-rendered HTML views.
//!
//! Templates live under `templates/` and only ever see the flattened view
//! structs below, so they need no formatting logic of their own.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use portfolio_core::types::{Date, DbId};
use portfolio_db::models::blob::Blob;
use portfolio_db::models::project::Project;
use serde_json::Value;

use crate::error::AppResult;

/// Render a template into an HTML response.
pub fn render<T: Template>(template: &T) -> AppResult<Response> {
    Ok(Html(template.render()?).into_response())
}

/// `YYYY-MM-DD`, the format `<input type="date">` expects.
pub fn iso_date(date: Date) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn optional_date(date: Option<Date>) -> String {
    date.map(iso_date).unwrap_or_default()
}

fn checked(on: bool) -> &'static str {
    if on {
        "checked"
    } else {
        ""
    }
}

// ---------------------------------------------------------------------------
// Blobs
// ---------------------------------------------------------------------------

/// An extra document field shown as a key/value pair.
pub struct Field {
    pub key: String,
    pub value: String,
}

pub struct BlobView {
    pub id: DbId,
    pub name: String,
    pub badge: String,
    pub dob: String,
    pub loved: &'static str,
    pub loved_checked: &'static str,
    pub unloved_checked: &'static str,
    pub fields: Vec<Field>,
}

impl From<&Blob> for BlobView {
    fn from(blob: &Blob) -> Self {
        let fields = blob
            .extra
            .as_object()
            .map(|extra| {
                extra
                    .iter()
                    .map(|(key, value)| Field {
                        key: key.clone(),
                        value: match value {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: blob.id,
            name: blob.name.clone().unwrap_or_default(),
            badge: blob.badge.map(|b| b.to_string()).unwrap_or_default(),
            dob: iso_date(blob.dob),
            loved: if blob.isloved { "yes" } else { "no" },
            loved_checked: checked(blob.isloved),
            unloved_checked: checked(!blob.isloved),
            fields,
        }
    }
}

#[derive(Template)]
#[template(path = "blobs/index.html")]
pub struct BlobIndex {
    pub title: &'static str,
    pub blobs: Vec<BlobView>,
}

impl BlobIndex {
    pub fn new(blobs: &[Blob]) -> Self {
        Self {
            title: "All my Blobs",
            blobs: blobs.iter().map(BlobView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "blobs/new.html")]
pub struct BlobNew {
    pub title: &'static str,
}

impl Default for BlobNew {
    fn default() -> Self {
        Self {
            title: "Add New Blob",
        }
    }
}

#[derive(Template)]
#[template(path = "blobs/show.html")]
pub struct BlobShow {
    pub title: String,
    pub blob: BlobView,
}

impl BlobShow {
    pub fn new(blob: &Blob) -> Self {
        let title = blob
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Blob {}", blob.id));
        Self {
            title,
            blob: BlobView::from(blob),
        }
    }
}

#[derive(Template)]
#[template(path = "blobs/edit.html")]
pub struct BlobEdit {
    pub title: String,
    pub blob: BlobView,
}

impl BlobEdit {
    pub fn new(blob: &Blob) -> Self {
        Self {
            title: format!("Blob{}", blob.id),
            blob: BlobView::from(blob),
        }
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub struct ProjectView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub finished_works: String,
    pub start_date: String,
    pub end_date: String,
    pub members: String,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.project_name.clone().unwrap_or_default(),
            description: project.project_description.clone().unwrap_or_default(),
            price: project
                .project_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            finished_works: project.project_finished_works.join(", "),
            start_date: optional_date(project.project_start_date),
            end_date: optional_date(project.project_end_date),
            members: project.project_members.join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "projects/index.html")]
pub struct ProjectIndex {
    pub title: &'static str,
    pub projects: Vec<ProjectView>,
}

impl ProjectIndex {
    pub fn new(projects: &[Project]) -> Self {
        Self {
            title: "Projects",
            projects: projects.iter().map(ProjectView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "projects/new.html")]
pub struct ProjectNew {
    pub title: &'static str,
}

impl Default for ProjectNew {
    fn default() -> Self {
        Self {
            title: "Add New Project",
        }
    }
}

#[derive(Template)]
#[template(path = "projects/show.html")]
pub struct ProjectShow {
    pub title: String,
    pub project: ProjectView,
}

impl ProjectShow {
    pub fn new(project: &Project) -> Self {
        let title = project
            .project_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Project {}", project.id));
        Self {
            title,
            project: ProjectView::from(project),
        }
    }
}

#[derive(Template)]
#[template(path = "projects/edit.html")]
pub struct ProjectEdit {
    pub title: String,
    pub project: ProjectView,
}

impl ProjectEdit {
    pub fn new(project: &Project) -> Self {
        Self {
            title: format!("Project: {}", project.id),
            project: ProjectView::from(project),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub title: String,
    pub status: u16,
    pub message: String,
}

impl ErrorView {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            status: status.as_u16(),
            message,
        }
    }
}
