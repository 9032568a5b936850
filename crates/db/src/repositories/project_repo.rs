//! Repository for the `projects` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_name, project_description, project_price, \
    project_finished_works, project_start_date, project_end_date, project_members, \
    created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (project_name, project_description, project_price,
                project_finished_works, project_start_date, project_end_date, project_members)
             VALUES ($1, $2, $3, COALESCE($4, '{{}}'), $5, $6, COALESCE($7, '{{}}'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_name)
            .bind(&input.project_description)
            .bind(input.project_price)
            .bind(&input.project_finished_works)
            .bind(input.project_start_date)
            .bind(input.project_end_date)
            .bind(&input.project_members)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Fields left out of `input` keep their stored value;
    /// nullable fields submitted blank are cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                project_name = COALESCE($2, project_name),
                project_description = COALESCE($3, project_description),
                project_price = CASE WHEN $4 THEN $5 ELSE project_price END,
                project_finished_works = COALESCE($6, project_finished_works),
                project_start_date = CASE WHEN $7 THEN $8 ELSE project_start_date END,
                project_end_date = CASE WHEN $9 THEN $10 ELSE project_end_date END,
                project_members = COALESCE($11, project_members)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.project_name)
            .bind(&input.project_description)
            .bind(input.project_price.is_some())
            .bind(input.project_price.flatten())
            .bind(&input.project_finished_works)
            .bind(input.project_start_date.is_some())
            .bind(input.project_start_date.flatten())
            .bind(input.project_end_date.is_some())
            .bind(input.project_end_date.flatten())
            .bind(&input.project_members)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
