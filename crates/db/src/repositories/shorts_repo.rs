//! Repositories for shorts projects and their sub-resources.
//!
//! Covers `shorts_projects`, `shorts_characters`, and `shorts_scenes`.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::shorts::{
    CreateShortsCharacter, CreateShortsProject, CreateShortsScene, ShortsCharacter, ShortsProject,
    ShortsScene, UpdateShortsCharacter, UpdateShortsProject, UpdateShortsScene,
};

const PROJECT_COLUMNS: &str =
    "id, title, description, aspect_ratio, created_by, created_at, updated_at";
const CHARACTER_COLUMNS: &str =
    "id, shorts_id, name, description, image_file_id, created_at, updated_at";
const SCENE_COLUMNS: &str =
    "id, shorts_id, scene_no, script, duration_secs, video_file_id, created_at, updated_at";

/// Provides CRUD operations for shorts projects.
pub struct ShortsRepo;

impl ShortsRepo {
    /// Insert a new shorts project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShortsProject,
        created_by: Option<DbId>,
    ) -> Result<ShortsProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO shorts_projects (title, description, aspect_ratio, created_by)
             VALUES ($1, $2, COALESCE($3, '9:16'), $4)
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, ShortsProject>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.aspect_ratio)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a shorts project by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShortsProject>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM shorts_projects WHERE id = $1");
        sqlx::query_as::<_, ShortsProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all shorts projects, ordered by title ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShortsProject>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM shorts_projects ORDER BY title ASC");
        sqlx::query_as::<_, ShortsProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a shorts project. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShortsProject,
    ) -> Result<Option<ShortsProject>, sqlx::Error> {
        let query = format!(
            "UPDATE shorts_projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                aspect_ratio = COALESCE($4, aspect_ratio)
             WHERE id = $1
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, ShortsProject>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.aspect_ratio)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a shorts project (sub-resources cascade). Returns
    /// `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shorts_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// ShortsCharacterRepo
// ---------------------------------------------------------------------------

/// Provides CRUD operations for shorts characters.
pub struct ShortsCharacterRepo;

impl ShortsCharacterRepo {
    /// Insert a new shorts character, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShortsCharacter,
    ) -> Result<ShortsCharacter, sqlx::Error> {
        let query = format!(
            "INSERT INTO shorts_characters (shorts_id, name, description, image_file_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {CHARACTER_COLUMNS}"
        );
        sqlx::query_as::<_, ShortsCharacter>(&query)
            .bind(input.shorts_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_one(pool)
            .await
    }

    /// Find a shorts character by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShortsCharacter>, sqlx::Error> {
        let query = format!("SELECT {CHARACTER_COLUMNS} FROM shorts_characters WHERE id = $1");
        sqlx::query_as::<_, ShortsCharacter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters of a shorts project, ordered by name ascending.
    pub async fn list_by_shorts(
        pool: &PgPool,
        shorts_id: DbId,
    ) -> Result<Vec<ShortsCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {CHARACTER_COLUMNS} FROM shorts_characters
             WHERE shorts_id = $1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, ShortsCharacter>(&query)
            .bind(shorts_id)
            .fetch_all(pool)
            .await
    }

    /// Update a shorts character. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShortsCharacter,
    ) -> Result<Option<ShortsCharacter>, sqlx::Error> {
        let query = format!(
            "UPDATE shorts_characters SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_file_id = COALESCE($4, image_file_id)
             WHERE id = $1
             RETURNING {CHARACTER_COLUMNS}"
        );
        sqlx::query_as::<_, ShortsCharacter>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a shorts character. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shorts_characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// ShortsSceneRepo
// ---------------------------------------------------------------------------

/// Provides CRUD operations for shorts scenes.
pub struct ShortsSceneRepo;

impl ShortsSceneRepo {
    /// Insert a new shorts scene, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShortsScene,
    ) -> Result<ShortsScene, sqlx::Error> {
        let query = format!(
            "INSERT INTO shorts_scenes
                (shorts_id, scene_no, script, duration_secs, video_file_id)
             VALUES ($1, COALESCE($2, 0), COALESCE($3, ''), $4, $5)
             RETURNING {SCENE_COLUMNS}"
        );
        sqlx::query_as::<_, ShortsScene>(&query)
            .bind(input.shorts_id)
            .bind(input.scene_no)
            .bind(&input.script)
            .bind(input.duration_secs)
            .bind(input.video_file_id)
            .fetch_one(pool)
            .await
    }

    /// Find a shorts scene by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShortsScene>, sqlx::Error> {
        let query = format!("SELECT {SCENE_COLUMNS} FROM shorts_scenes WHERE id = $1");
        sqlx::query_as::<_, ShortsScene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scenes of a shorts project, ordered by scene number
    /// ascending.
    pub async fn list_by_shorts(
        pool: &PgPool,
        shorts_id: DbId,
    ) -> Result<Vec<ShortsScene>, sqlx::Error> {
        let query = format!(
            "SELECT {SCENE_COLUMNS} FROM shorts_scenes
             WHERE shorts_id = $1
             ORDER BY scene_no ASC"
        );
        sqlx::query_as::<_, ShortsScene>(&query)
            .bind(shorts_id)
            .fetch_all(pool)
            .await
    }

    /// Update a shorts scene. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShortsScene,
    ) -> Result<Option<ShortsScene>, sqlx::Error> {
        let query = format!(
            "UPDATE shorts_scenes SET
                scene_no = COALESCE($2, scene_no),
                script = COALESCE($3, script),
                duration_secs = COALESCE($4, duration_secs),
                video_file_id = COALESCE($5, video_file_id)
             WHERE id = $1
             RETURNING {SCENE_COLUMNS}"
        );
        sqlx::query_as::<_, ShortsScene>(&query)
            .bind(id)
            .bind(input.scene_no)
            .bind(&input.script)
            .bind(input.duration_secs)
            .bind(input.video_file_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a shorts scene. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shorts_scenes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
