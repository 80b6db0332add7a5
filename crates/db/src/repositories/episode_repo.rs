//! Repository for the `episodes` table.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::webtoon::{CreateEpisode, Episode, UpdateEpisode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, webtoon_id, episode_no, title, synopsis, created_at, updated_at";

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, returning the created row.
    ///
    /// `(webtoon_id, episode_no)` is unique; a duplicate number surfaces as
    /// a constraint violation the HTTP layer maps to 409.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes (webtoon_id, episode_no, title, synopsis)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.webtoon_id)
            .bind(input.episode_no)
            .bind(&input.title)
            .bind(&input.synopsis)
            .fetch_one(pool)
            .await
    }

    /// Find an episode by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all episodes of a webtoon, ordered by episode number ascending.
    pub async fn list_by_webtoon(
        pool: &PgPool,
        webtoon_id: DbId,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes
             WHERE webtoon_id = $1
             ORDER BY episode_no ASC"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(webtoon_id)
            .fetch_all(pool)
            .await
    }

    /// Update an episode. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                episode_no = COALESCE($2, episode_no),
                title = COALESCE($3, title),
                synopsis = COALESCE($4, synopsis)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(input.episode_no)
            .bind(&input.title)
            .bind(&input.synopsis)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an episode. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
