//! Short-video project models and DTOs.
//!
//! Covers `shorts_projects`, `shorts_characters`, and `shorts_scenes`.

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A shorts project row from the `shorts_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShortsProject {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub aspect_ratio: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new shorts project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShortsProject {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `9:16` if omitted.
    pub aspect_ratio: Option<String>,
}

/// DTO for updating an existing shorts project.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShortsProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub aspect_ratio: Option<String>,
}

// ---------------------------------------------------------------------------
// ShortsCharacter
// ---------------------------------------------------------------------------

/// A character row from the `shorts_characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShortsCharacter {
    pub id: DbId,
    pub shorts_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new shorts character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShortsCharacter {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub shorts_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}

/// DTO for updating an existing shorts character.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShortsCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// ShortsScene
// ---------------------------------------------------------------------------

/// A scene row from the `shorts_scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShortsScene {
    pub id: DbId,
    pub shorts_id: DbId,
    pub scene_no: i32,
    pub script: String,
    pub duration_secs: Option<f32>,
    pub video_file_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new shorts scene.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShortsScene {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub shorts_id: DbId,
    pub scene_no: Option<i32>,
    pub script: Option<String>,
    pub duration_secs: Option<f32>,
    pub video_file_id: Option<DbId>,
}

/// DTO for updating an existing shorts scene.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShortsScene {
    pub scene_no: Option<i32>,
    pub script: Option<String>,
    pub duration_secs: Option<f32>,
    pub video_file_id: Option<DbId>,
}
