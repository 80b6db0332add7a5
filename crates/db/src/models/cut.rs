//! Episode cut model and DTOs.
//!
//! Cuts are the ordered visual units of an episode; `cut_index` is dense,
//! zero-based, and unique per episode.

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A cut row from the `cuts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cut {
    pub id: DbId,
    pub episode_id: DbId,
    pub cut_index: i32,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new cut.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCut {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub episode_id: DbId,
    /// Insert position. Omitted appends; out-of-range values are clamped.
    pub cut_index: Option<i32>,
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}

/// DTO for updating a cut. Position changes go through insert/delete.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCut {
    pub description: Option<String>,
    pub image_file_id: Option<DbId>,
}
