//! Webtoon and episode models and DTOs.

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A webtoon row from the `webtoons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Webtoon {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new webtoon.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWebtoon {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// DTO for updating an existing webtoon. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWebtoon {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

/// An episode row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub webtoon_id: DbId,
    pub episode_no: i32,
    pub title: String,
    pub synopsis: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new episode.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisode {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub webtoon_id: DbId,
    pub episode_no: i32,
    pub title: String,
    pub synopsis: Option<String>,
}

/// DTO for updating an existing episode.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEpisode {
    pub episode_no: Option<i32>,
    pub title: Option<String>,
    pub synopsis: Option<String>,
}
