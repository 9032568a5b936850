//! Project document model and DTOs.
//!
//! Wire names are camelCase (`projectName`, `projectMembers`, ...) so the
//! same field names work for HTML forms and JSON bodies.

use portfolio_core::form;
use portfolio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub project_price: Option<f64>,
    pub project_finished_works: Vec<String>,
    pub project_start_date: Option<Date>,
    pub project_end_date: Option<Date>,
    pub project_members: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default, deserialize_with = "form::number")]
    pub project_price: Option<f64>,
    #[serde(default, deserialize_with = "form::list")]
    pub project_finished_works: Option<Vec<String>>,
    #[serde(default, deserialize_with = "form::date")]
    pub project_start_date: Option<Date>,
    #[serde(default, deserialize_with = "form::date")]
    pub project_end_date: Option<Date>,
    #[serde(default, deserialize_with = "form::list")]
    pub project_members: Option<Vec<String>>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// Nullable fields are `Some(None)` when submitted blank, which clears them;
/// blank lists clear to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default, deserialize_with = "form::clearable_number")]
    pub project_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "form::clearable_list")]
    pub project_finished_works: Option<Vec<String>>,
    #[serde(default, deserialize_with = "form::clearable_date")]
    pub project_start_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "form::clearable_date")]
    pub project_end_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "form::clearable_list")]
    pub project_members: Option<Vec<String>>,
}
