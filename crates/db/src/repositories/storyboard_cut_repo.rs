//! Repository for the `storyboard_cuts` table.
//!
//! Panel images live in-row as base64 text. `cut_index` follows the same
//! dense ordered-collection protocol as episode scripts and cuts, unique
//! per storyboard (`uq_storyboard_cuts_order`).

use cutroom_core::ordering;
use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::storyboard::{CreateStoryboardCut, StoryboardCut, UpdateStoryboardCut};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, storyboard_id, cut_index, image_data, mime_type, caption, \
     created_at, updated_at";

/// Provides CRUD and reindexing operations for storyboard cut images.
pub struct StoryboardCutRepo;

impl StoryboardCutRepo {
    /// Insert a new panel at the requested position, returning the created
    /// row.
    ///
    /// Siblings at or above the insert position shift up by one, highest
    /// index first; the unique `(storyboard_id, cut_index)` constraint holds
    /// after every statement.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStoryboardCut,
    ) -> Result<StoryboardCut, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM storyboard_cuts WHERE storyboard_id = $1")
                .bind(input.storyboard_id)
                .fetch_one(&mut *tx)
                .await?;
        let index = ordering::resolve_insert_index(input.cut_index, count);

        let siblings: Vec<(DbId, i32)> = sqlx::query_as(
            "SELECT id, cut_index FROM storyboard_cuts
             WHERE storyboard_id = $1 AND cut_index >= $2
             ORDER BY cut_index DESC",
        )
        .bind(input.storyboard_id)
        .bind(index)
        .fetch_all(&mut *tx)
        .await?;

        for (id, cut_index) in siblings {
            sqlx::query("UPDATE storyboard_cuts SET cut_index = $2 WHERE id = $1")
                .bind(id)
                .bind(cut_index + 1)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "INSERT INTO storyboard_cuts
                (storyboard_id, cut_index, image_data, mime_type, caption)
             VALUES ($1, $2, $3, COALESCE($4, 'image/png'), $5)
             RETURNING {COLUMNS}"
        );
        let cut = sqlx::query_as::<_, StoryboardCut>(&query)
            .bind(input.storyboard_id)
            .bind(index)
            .bind(&input.image_data)
            .bind(&input.mime_type)
            .bind(&input.caption)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(cut)
    }

    /// Find a panel by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StoryboardCut>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM storyboard_cuts WHERE id = $1");
        sqlx::query_as::<_, StoryboardCut>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all panels for a storyboard, ordered by position.
    pub async fn list_by_storyboard(
        pool: &PgPool,
        storyboard_id: DbId,
    ) -> Result<Vec<StoryboardCut>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM storyboard_cuts
             WHERE storyboard_id = $1
             ORDER BY cut_index ASC"
        );
        sqlx::query_as::<_, StoryboardCut>(&query)
            .bind(storyboard_id)
            .fetch_all(pool)
            .await
    }

    /// Update a panel's image payload and/or caption. Position is not
    /// touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStoryboardCut,
    ) -> Result<Option<StoryboardCut>, sqlx::Error> {
        let query = format!(
            "UPDATE storyboard_cuts SET
                image_data = COALESCE($2, image_data),
                mime_type = COALESCE($3, mime_type),
                caption = COALESCE($4, caption)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoryboardCut>(&query)
            .bind(id)
            .bind(&input.image_data)
            .bind(&input.mime_type)
            .bind(&input.caption)
            .fetch_optional(pool)
            .await
    }

    /// Delete a panel and close the gap, shifting higher siblings down by
    /// one in ascending order. Returns `false` if no row with the given id
    /// exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed: Option<(DbId, i32)> =
            sqlx::query_as("SELECT storyboard_id, cut_index FROM storyboard_cuts WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((storyboard_id, index)) = removed else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM storyboard_cuts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let siblings: Vec<(DbId, i32)> = sqlx::query_as(
            "SELECT id, cut_index FROM storyboard_cuts
             WHERE storyboard_id = $1 AND cut_index > $2
             ORDER BY cut_index ASC",
        )
        .bind(storyboard_id)
        .bind(index)
        .fetch_all(&mut *tx)
        .await?;

        for (sibling_id, cut_index) in siblings {
            sqlx::query("UPDATE storyboard_cuts SET cut_index = $2 WHERE id = $1")
                .bind(sibling_id)
                .bind(cut_index - 1)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
