//! Repository for the `character_sheets` table.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{CharacterSheet, CreateCharacterSheet, UpdateCharacterSheet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_id, label, file_id, notes, created_at, updated_at";

/// Provides CRUD operations for character reference sheets.
pub struct CharacterSheetRepo;

impl CharacterSheetRepo {
    /// Insert a new sheet, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCharacterSheet,
    ) -> Result<CharacterSheet, sqlx::Error> {
        let query = format!(
            "INSERT INTO character_sheets (character_id, label, file_id, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterSheet>(&query)
            .bind(input.character_id)
            .bind(&input.label)
            .bind(input.file_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a sheet by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterSheet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character_sheets WHERE id = $1");
        sqlx::query_as::<_, CharacterSheet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sheets for a character, ordered by label ascending.
    pub async fn list_by_character(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<CharacterSheet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM character_sheets
             WHERE character_id = $1
             ORDER BY label ASC"
        );
        sqlx::query_as::<_, CharacterSheet>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await
    }

    /// Update a sheet. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacterSheet,
    ) -> Result<Option<CharacterSheet>, sqlx::Error> {
        let query = format!(
            "UPDATE character_sheets SET
                label = COALESCE($2, label),
                file_id = COALESCE($3, file_id),
                notes = COALESCE($4, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterSheet>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(input.file_id)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a sheet. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM character_sheets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
