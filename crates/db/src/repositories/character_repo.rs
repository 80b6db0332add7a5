//! Repository for the `characters` table.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, folder_id, created_by, created_at, updated_at";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCharacter,
        created_by: Option<DbId>,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, description, folder_id, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.folder_id)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters, optionally restricted to one folder, ordered by
    /// name ascending.
    pub async fn list(
        pool: &PgPool,
        folder_id: Option<DbId>,
    ) -> Result<Vec<Character>, sqlx::Error> {
        match folder_id {
            Some(folder_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM characters WHERE folder_id = $1 ORDER BY name ASC"
                );
                sqlx::query_as::<_, Character>(&query)
                    .bind(folder_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM characters ORDER BY name ASC");
                sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                folder_id = COALESCE($4, folder_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.folder_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a character (sheets cascade). Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
