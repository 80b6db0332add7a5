//! Character, character folder, and character sheet models and DTOs.

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub folder_id: Option<DbId>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub description: Option<String>,
    pub folder_id: Option<DbId>,
}

/// DTO for updating an existing character.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub folder_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// CharacterFolder
// ---------------------------------------------------------------------------

/// A folder row from the `character_folders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterFolder {
    pub id: DbId,
    pub name: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character folder.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacterFolder {
    pub name: String,
}

/// DTO for renaming a character folder.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacterFolder {
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// CharacterSheet
// ---------------------------------------------------------------------------

/// A reference-sheet row from the `character_sheets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterSheet {
    pub id: DbId,
    pub character_id: DbId,
    pub label: String,
    pub file_id: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacterSheet {
    /// Overridden by the URL path on nested routes.
    #[serde(default)]
    pub character_id: DbId,
    pub label: String,
    pub file_id: Option<DbId>,
    pub notes: Option<String>,
}

/// DTO for updating an existing character sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacterSheet {
    pub label: Option<String>,
    pub file_id: Option<DbId>,
    pub notes: Option<String>,
}
