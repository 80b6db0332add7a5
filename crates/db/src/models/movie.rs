//! Movie project models and DTOs.
//!
//! Covers five related tables:
//! - `movie_projects` -- top-level project
//! - `movie_characters` / `movie_backgrounds` -- visual assets
//! - `movie_scenes` -- script units
//! - `movie_cuts` -- per-scene shot list (display order only)

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie project row from the `movie_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieProject {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieProject {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for updating an existing movie project.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovieProject {
    pub title: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// MovieCharacter / MovieBackground
// ---------------------------------------------------------------------------

/// A character asset row from the `movie_characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieCharacter {
    pub id: DbId,
    pub movie_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A background asset row from the `movie_backgrounds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieBackground {
    pub id: DbId,
    pub movie_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Shared DTO for creating a movie character or background.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieAsset {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub movie_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}

/// Shared DTO for updating a movie character or background.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovieAsset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// MovieScene / MovieCut
// ---------------------------------------------------------------------------

/// A scene row from the `movie_scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieScene {
    pub id: DbId,
    pub movie_id: DbId,
    pub scene_no: i32,
    pub title: String,
    pub script: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie scene.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieScene {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub movie_id: DbId,
    pub scene_no: Option<i32>,
    pub title: String,
    pub script: Option<String>,
}

/// DTO for updating an existing movie scene.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovieScene {
    pub scene_no: Option<i32>,
    pub title: Option<String>,
    pub script: Option<String>,
}

/// A shot row from the `movie_cuts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieCut {
    pub id: DbId,
    pub scene_id: DbId,
    pub cut_index: i32,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie cut.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieCut {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub scene_id: DbId,
    pub cut_index: Option<i32>,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}

/// DTO for updating an existing movie cut.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovieCut {
    pub cut_index: Option<i32>,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}
