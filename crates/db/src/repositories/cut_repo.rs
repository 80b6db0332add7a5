//! Repository for the `cuts` table.
//!
//! Cuts share the ordered-collection protocol with episode scripts:
//! `cut_index` is dense, zero-based, and unique per episode (`uq_cuts_order`).

use cutroom_core::ordering;
use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::cut::{CreateCut, Cut, UpdateCut};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, episode_id, cut_index, description, image_file_id, created_at, updated_at";

/// Provides CRUD and reindexing operations for episode cuts.
pub struct CutRepo;

impl CutRepo {
    /// Insert a new cut at the requested position, returning the created row.
    ///
    /// Siblings at or above the insert position shift up by one, highest
    /// index first, keeping `(episode_id, cut_index)` unique after every
    /// statement.
    pub async fn create(pool: &PgPool, input: &CreateCut) -> Result<Cut, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cuts WHERE episode_id = $1")
            .bind(input.episode_id)
            .fetch_one(&mut *tx)
            .await?;
        let index = ordering::resolve_insert_index(input.cut_index, count);

        let siblings: Vec<(DbId, i32)> = sqlx::query_as(
            "SELECT id, cut_index FROM cuts
             WHERE episode_id = $1 AND cut_index >= $2
             ORDER BY cut_index DESC",
        )
        .bind(input.episode_id)
        .bind(index)
        .fetch_all(&mut *tx)
        .await?;

        for (id, cut_index) in siblings {
            sqlx::query("UPDATE cuts SET cut_index = $2 WHERE id = $1")
                .bind(id)
                .bind(cut_index + 1)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "INSERT INTO cuts (episode_id, cut_index, description, image_file_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let cut = sqlx::query_as::<_, Cut>(&query)
            .bind(input.episode_id)
            .bind(index)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(cut)
    }

    /// Find a cut by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cut>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cuts WHERE id = $1");
        sqlx::query_as::<_, Cut>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cuts for an episode, ordered by position.
    pub async fn list_by_episode(pool: &PgPool, episode_id: DbId) -> Result<Vec<Cut>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cuts
             WHERE episode_id = $1
             ORDER BY cut_index ASC"
        );
        sqlx::query_as::<_, Cut>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    /// Update a cut's description and/or image. Position is not touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCut,
    ) -> Result<Option<Cut>, sqlx::Error> {
        let query = format!(
            "UPDATE cuts SET
                description = COALESCE($2, description),
                image_file_id = COALESCE($3, image_file_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cut>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cut and close the gap, shifting higher siblings down by one
    /// in ascending order. Returns `false` if no row with the given id exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed: Option<(DbId, i32)> =
            sqlx::query_as("SELECT episode_id, cut_index FROM cuts WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((episode_id, index)) = removed else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM cuts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let siblings: Vec<(DbId, i32)> = sqlx::query_as(
            "SELECT id, cut_index FROM cuts
             WHERE episode_id = $1 AND cut_index > $2
             ORDER BY cut_index ASC",
        )
        .bind(episode_id)
        .bind(index)
        .fetch_all(&mut *tx)
        .await?;

        for (sibling_id, cut_index) in siblings {
            sqlx::query("UPDATE cuts SET cut_index = $2 WHERE id = $1")
                .bind(sibling_id)
                .bind(cut_index - 1)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
