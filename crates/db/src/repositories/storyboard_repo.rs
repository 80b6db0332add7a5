//! Repository for the `storyboards` table.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::storyboard::{CreateStoryboard, Storyboard, UpdateStoryboard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, episode_id, name, notes, created_at, updated_at";

/// Provides CRUD operations for storyboards.
pub struct StoryboardRepo;

impl StoryboardRepo {
    /// Insert a new storyboard, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStoryboard,
    ) -> Result<Storyboard, sqlx::Error> {
        let query = format!(
            "INSERT INTO storyboards (episode_id, name, notes)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storyboard>(&query)
            .bind(input.episode_id)
            .bind(&input.name)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a storyboard by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Storyboard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storyboards WHERE id = $1");
        sqlx::query_as::<_, Storyboard>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all storyboards of an episode, ordered by creation time.
    pub async fn list_by_episode(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<Storyboard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM storyboards
             WHERE episode_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Storyboard>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    /// Update a storyboard. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStoryboard,
    ) -> Result<Option<Storyboard>, sqlx::Error> {
        let query = format!(
            "UPDATE storyboards SET
                name = COALESCE($2, name),
                notes = COALESCE($3, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Storyboard>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a storyboard (panels cascade). Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM storyboards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
