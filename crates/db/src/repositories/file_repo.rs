//! Repository for the `files` table.
//!
//! Covers the temporary-vs-permanent lifecycle (promotion only changes
//! metadata, never moves the stored object) and derived-file queries, which
//! are visibility-filtered: a row is visible when it is public or was
//! created by the viewer; anonymous viewers see only public rows.

use std::collections::HashMap;

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::file::{CreateFile, DerivedFileCount, StoredFile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, storage_key, url, mime_type, size_bytes, original_name, \
     width, height, is_temp, process_id, source_file_id, is_public, created_by, \
     created_at, updated_at";

/// Provides lifecycle and derivation queries for stored files.
pub struct FileRepo;

impl FileRepo {
    /// Insert a new file row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFile) -> Result<StoredFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO files
                (storage_key, url, mime_type, size_bytes, original_name, width, height,
                 is_temp, source_file_id, is_public, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoredFile>(&query)
            .bind(&input.storage_key)
            .bind(&input.url)
            .bind(&input.mime_type)
            .bind(input.size_bytes)
            .bind(&input.original_name)
            .bind(input.width)
            .bind(input.height)
            .bind(input.is_temp)
            .bind(input.source_file_id)
            .bind(input.is_public)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a file by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StoredFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM files WHERE id = $1");
        sqlx::query_as::<_, StoredFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Promote a temporary file into a pipeline stage.
    ///
    /// Flips `is_temp` to false and assigns `process_id`; the stored object
    /// itself is not relocated. Returns `None` if no row with the given id
    /// exists.
    pub async fn promote(
        pool: &PgPool,
        id: DbId,
        process_id: &str,
    ) -> Result<Option<StoredFile>, sqlx::Error> {
        let query = format!(
            "UPDATE files SET is_temp = FALSE, process_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoredFile>(&query)
            .bind(id)
            .bind(process_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a file row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List files derived from `source_file_id`, visibility-filtered.
    ///
    /// `viewer` is the requesting user, or `None` for anonymous requests
    /// (which see only public rows).
    pub async fn list_derived(
        pool: &PgPool,
        source_file_id: DbId,
        viewer: Option<DbId>,
    ) -> Result<Vec<StoredFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM files
             WHERE source_file_id = $1 AND (is_public = TRUE OR created_by = $2)
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, StoredFile>(&query)
            .bind(source_file_id)
            .bind(viewer)
            .fetch_all(pool)
            .await
    }

    /// Count visible derived files for a batch of source ids.
    ///
    /// One filtered fetch of the matching derivation edges, tallied in
    /// memory by `source_file_id`. Every requested id appears in the result;
    /// ids with no visible derived rows (including ids that do not exist)
    /// report zero.
    pub async fn count_derived_batch(
        pool: &PgPool,
        source_ids: &[DbId],
        viewer: Option<DbId>,
    ) -> Result<Vec<DerivedFileCount>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT source_file_id FROM files
             WHERE source_file_id = ANY($1) AND (is_public = TRUE OR created_by = $2)",
        )
        .bind(source_ids)
        .bind(viewer)
        .fetch_all(pool)
        .await?;

        let mut tally: HashMap<DbId, i64> = HashMap::new();
        for (source_file_id,) in rows {
            *tally.entry(source_file_id).or_default() += 1;
        }

        Ok(source_ids
            .iter()
            .map(|&source_file_id| DerivedFileCount {
                source_file_id,
                count: tally.get(&source_file_id).copied().unwrap_or(0),
            })
            .collect())
    }
}
