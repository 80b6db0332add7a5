//! Repository for the `character_folders` table.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{CharacterFolder, CreateCharacterFolder, UpdateCharacterFolder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_by, created_at, updated_at";

/// Provides CRUD operations for character folders.
pub struct CharacterFolderRepo;

impl CharacterFolderRepo {
    /// Insert a new folder, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCharacterFolder,
        created_by: Option<DbId>,
    ) -> Result<CharacterFolder, sqlx::Error> {
        let query = format!(
            "INSERT INTO character_folders (name, created_by)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterFolder>(&query)
            .bind(&input.name)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a folder by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterFolder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character_folders WHERE id = $1");
        sqlx::query_as::<_, CharacterFolder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all folders, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<CharacterFolder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character_folders ORDER BY name ASC");
        sqlx::query_as::<_, CharacterFolder>(&query)
            .fetch_all(pool)
            .await
    }

    /// Rename a folder.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacterFolder,
    ) -> Result<Option<CharacterFolder>, sqlx::Error> {
        let query = format!(
            "UPDATE character_folders SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterFolder>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a folder. Characters inside it are detached, not
    /// deleted. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM character_folders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
