//! Repository for the `blobs` table.

use portfolio_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::blob::{sanitize_extra, Blob, CreateBlob, UpdateBlob};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, badge, dob, isloved, extra, created_at, updated_at";

/// Provides CRUD operations for blobs.
pub struct BlobRepo;

impl BlobRepo {
    /// Insert a new blob, returning the created row.
    ///
    /// `dob` defaults to today and `isloved` to `false` when not submitted.
    pub async fn create(pool: &PgPool, input: &CreateBlob) -> Result<Blob, sqlx::Error> {
        let query = format!(
            "INSERT INTO blobs (name, badge, dob, isloved, extra)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), COALESCE($4, FALSE), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blob>(&query)
            .bind(&input.name)
            .bind(input.badge)
            .bind(input.dob)
            .bind(input.isloved)
            .bind(Json(sanitize_extra(&input.extra)))
            .fetch_one(pool)
            .await
    }

    /// Find a blob by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blobs WHERE id = $1");
        sqlx::query_as::<_, Blob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all blobs ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Blob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blobs ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Blob>(&query).fetch_all(pool).await
    }

    /// Update a blob. Fields left out of `input` keep their stored value, a
    /// blank badge clears it, and extra fields are merged key by key into the
    /// stored object.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlob,
    ) -> Result<Option<Blob>, sqlx::Error> {
        let query = format!(
            "UPDATE blobs SET
                name = COALESCE($2, name),
                badge = CASE WHEN $3 THEN $4 ELSE badge END,
                dob = COALESCE($5, dob),
                isloved = COALESCE($6, isloved),
                extra = extra || $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blob>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.badge.is_some())
            .bind(input.badge.flatten())
            .bind(input.dob)
            .bind(input.isloved)
            .bind(Json(sanitize_extra(&input.extra)))
            .fetch_optional(pool)
            .await
    }

    /// Delete a blob by ID, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Blob>, sqlx::Error> {
        let query = format!("DELETE FROM blobs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Blob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
