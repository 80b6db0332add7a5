//! Handlers for `/characters/{id}/sheets`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::character::{CharacterSheet, CreateCharacterSheet, UpdateCharacterSheet};
use cutroom_db::repositories::CharacterSheetRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::character::ensure_character_exists;
use crate::state::AppState;

/// GET /api/v1/characters/{id}/sheets
pub async fn list(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
) -> AppResult<Json<Vec<CharacterSheet>>> {
    ensure_character_exists(&state, character_id).await?;
    let sheets = CharacterSheetRepo::list_by_character(&state.pool, character_id).await?;
    Ok(Json(sheets))
}

/// POST /api/v1/characters/{id}/sheets
pub async fn create(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
    Json(mut input): Json<CreateCharacterSheet>,
) -> AppResult<(StatusCode, Json<CharacterSheet>)> {
    ensure_character_exists(&state, character_id).await?;
    if input.label.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Label must not be empty".into(),
        )));
    }
    input.character_id = character_id;
    let sheet = CharacterSheetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(sheet)))
}

/// PUT /api/v1/characters/{id}/sheets/{sheet_id}
pub async fn update(
    State(state): State<AppState>,
    Path((character_id, sheet_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCharacterSheet>,
) -> AppResult<Json<CharacterSheet>> {
    find_in_character(&state, character_id, sheet_id).await?;
    let updated = CharacterSheetRepo::update(&state.pool, sheet_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CharacterSheet",
            id: sheet_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/characters/{id}/sheets/{sheet_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((character_id, sheet_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_in_character(&state, character_id, sheet_id).await?;
    CharacterSheetRepo::delete(&state.pool, sheet_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a sheet and confirm it belongs to the character in the path.
async fn find_in_character(
    state: &AppState,
    character_id: DbId,
    sheet_id: DbId,
) -> AppResult<CharacterSheet> {
    let sheet = CharacterSheetRepo::find_by_id(&state.pool, sheet_id)
        .await?
        .filter(|s| s.character_id == character_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CharacterSheet",
            id: sheet_id,
        }))?;
    Ok(sheet)
}
