//! Storyboard and storyboard cut image models and DTOs.
//!
//! Storyboard panels keep their image payload in-row as base64 text; the
//! `cut_index` column is dense, zero-based, and unique per storyboard.

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A storyboard row from the `storyboards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Storyboard {
    pub id: DbId,
    pub episode_id: DbId,
    pub name: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new storyboard.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryboard {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub episode_id: DbId,
    pub name: String,
    pub notes: Option<String>,
}

/// DTO for updating an existing storyboard.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStoryboard {
    pub name: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// StoryboardCut
// ---------------------------------------------------------------------------

/// A panel image row from the `storyboard_cuts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoryboardCut {
    pub id: DbId,
    pub storyboard_id: DbId,
    pub cut_index: i32,
    /// Base64-encoded image payload.
    pub image_data: String,
    pub mime_type: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new storyboard cut.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryboardCut {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub storyboard_id: DbId,
    /// Insert position. Omitted appends; out-of-range values are clamped.
    pub cut_index: Option<i32>,
    pub image_data: String,
    pub mime_type: Option<String>,
    pub caption: Option<String>,
}

/// DTO for updating a storyboard cut. Position changes go through
/// insert/delete.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStoryboardCut {
    pub image_data: Option<String>,
    pub mime_type: Option<String>,
    pub caption: Option<String>,
}
