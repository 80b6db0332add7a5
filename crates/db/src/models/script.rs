//! Episode script model and DTOs.
//!
//! Scripts are an ordered collection: `order_index` is dense, zero-based,
//! and unique per episode.

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An episode script row from the `episode_scripts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EpisodeScript {
    pub id: DbId,
    pub episode_id: DbId,
    pub order_index: i32,
    pub title: Option<String>,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new episode script.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisodeScript {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub episode_id: DbId,
    /// Insert position. Omitted appends; out-of-range values are clamped.
    pub order_index: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// DTO for updating a script's content. Ordering changes go through reorder.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEpisodeScript {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Request body for `PUT /episodes/{id}/scripts/reorder`.
///
/// Must list every script id of the episode exactly once; each id's stored
/// `order_index` becomes its position in this sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderScripts {
    pub script_ids: Vec<DbId>,
}
