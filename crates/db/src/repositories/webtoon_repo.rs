//! Repository for the `webtoons` table.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::webtoon::{CreateWebtoon, UpdateWebtoon, Webtoon};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, thumbnail_url, created_by, created_at, updated_at";

/// Provides CRUD operations for webtoons.
pub struct WebtoonRepo;

impl WebtoonRepo {
    /// Insert a new webtoon, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWebtoon,
        created_by: Option<DbId>,
    ) -> Result<Webtoon, sqlx::Error> {
        let query = format!(
            "INSERT INTO webtoons (title, description, thumbnail_url, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Webtoon>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail_url)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a webtoon by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Webtoon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webtoons WHERE id = $1");
        sqlx::query_as::<_, Webtoon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all webtoons, ordered by title ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Webtoon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webtoons ORDER BY title ASC");
        sqlx::query_as::<_, Webtoon>(&query).fetch_all(pool).await
    }

    /// Update a webtoon. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWebtoon,
    ) -> Result<Option<Webtoon>, sqlx::Error> {
        let query = format!(
            "UPDATE webtoons SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                thumbnail_url = COALESCE($4, thumbnail_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Webtoon>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail_url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a webtoon. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM webtoons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
