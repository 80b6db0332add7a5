//! Repository for the `episode_scripts` table.
//!
//! Scripts are an ordered collection: `order_index` is dense, zero-based,
//! and unique per episode (`uq_episode_scripts_order`). Inserts, deletes,
//! and reorders run inside a transaction so no mixed old/new index state is
//! ever visible outside it.

use cutroom_core::ordering;
use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::script::{CreateEpisodeScript, EpisodeScript, UpdateEpisodeScript};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, episode_id, order_index, title, content, created_at, updated_at";

/// Provides CRUD and reindexing operations for episode scripts.
pub struct EpisodeScriptRepo;

impl EpisodeScriptRepo {
    /// Insert a new script at the requested position, returning the created
    /// row.
    ///
    /// Omitted `order_index` appends; out-of-range values are clamped.
    /// Siblings at or above the insert position are shifted up by one,
    /// highest index first, so the unique `(episode_id, order_index)`
    /// constraint holds after every statement.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEpisodeScript,
    ) -> Result<EpisodeScript, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM episode_scripts WHERE episode_id = $1")
                .bind(input.episode_id)
                .fetch_one(&mut *tx)
                .await?;
        let index = ordering::resolve_insert_index(input.order_index, count);

        let siblings: Vec<(DbId, i32)> = sqlx::query_as(
            "SELECT id, order_index FROM episode_scripts
             WHERE episode_id = $1 AND order_index >= $2
             ORDER BY order_index DESC",
        )
        .bind(input.episode_id)
        .bind(index)
        .fetch_all(&mut *tx)
        .await?;

        for (id, order_index) in siblings {
            sqlx::query("UPDATE episode_scripts SET order_index = $2 WHERE id = $1")
                .bind(id)
                .bind(order_index + 1)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "INSERT INTO episode_scripts (episode_id, order_index, title, content)
             VALUES ($1, $2, $3, COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        let script = sqlx::query_as::<_, EpisodeScript>(&query)
            .bind(input.episode_id)
            .bind(index)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(script)
    }

    /// Find a script by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EpisodeScript>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episode_scripts WHERE id = $1");
        sqlx::query_as::<_, EpisodeScript>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scripts for an episode, ordered by position.
    pub async fn list_by_episode(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<EpisodeScript>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episode_scripts
             WHERE episode_id = $1
             ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, EpisodeScript>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    /// List the script ids of an episode in current display order.
    pub async fn list_ids_by_episode(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id FROM episode_scripts WHERE episode_id = $1 ORDER BY order_index ASC",
        )
        .bind(episode_id)
        .fetch_all(pool)
        .await
    }

    /// Update a script's title and/or content. Ordering is not touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisodeScript,
    ) -> Result<Option<EpisodeScript>, sqlx::Error> {
        let query = format!(
            "UPDATE episode_scripts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EpisodeScript>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a script and close the gap it leaves.
    ///
    /// Siblings above the removed position are shifted down by one, lowest
    /// index first (each row moves into the slot just freed below it).
    /// Returns `false` if no row with the given id exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed: Option<(DbId, i32)> =
            sqlx::query_as("SELECT episode_id, order_index FROM episode_scripts WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((episode_id, index)) = removed else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM episode_scripts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let siblings: Vec<(DbId, i32)> = sqlx::query_as(
            "SELECT id, order_index FROM episode_scripts
             WHERE episode_id = $1 AND order_index > $2
             ORDER BY order_index ASC",
        )
        .bind(episode_id)
        .bind(index)
        .fetch_all(&mut *tx)
        .await?;

        for (sibling_id, order_index) in siblings {
            sqlx::query("UPDATE episode_scripts SET order_index = $2 WHERE id = $1")
                .bind(sibling_id)
                .bind(order_index - 1)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Apply a full permutation of an episode's scripts, all-or-nothing.
    ///
    /// Each id's `order_index` becomes its position in `ordered_ids`. The
    /// caller is responsible for validating that `ordered_ids` is exactly a
    /// permutation of the episode's current script ids. All rows are first
    /// moved to negative scratch indices in a single statement so the final
    /// assignments never collide with a not-yet-moved row.
    pub async fn reorder(
        pool: &PgPool,
        episode_id: DbId,
        ordered_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE episode_scripts SET order_index = -(order_index + 1) WHERE episode_id = $1",
        )
        .bind(episode_id)
        .execute(&mut *tx)
        .await?;

        for (position, id) in ordered_ids.iter().enumerate() {
            sqlx::query(
                "UPDATE episode_scripts SET order_index = $3
                 WHERE id = $1 AND episode_id = $2",
            )
            .bind(id)
            .bind(episode_id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}
