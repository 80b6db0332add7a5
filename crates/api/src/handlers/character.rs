//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use cutroom_db::repositories::{CharacterFolderRepo, CharacterRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// Query parameters for `GET /characters`.
#[derive(Debug, Deserialize)]
pub struct ListCharactersParams {
    /// Restrict the listing to a single folder.
    pub folder_id: Option<DbId>,
}

/// GET /api/v1/characters?folder_id=…
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListCharactersParams>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool, params.folder_id).await?;
    Ok(Json(characters))
}

/// POST /api/v1/characters
///
/// A supplied `folder_id` must point at an existing folder.
pub async fn create(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    if let Some(folder_id) = input.folder_id {
        CharacterFolderRepo::find_by_id(&state.pool, folder_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "CharacterFolder",
                id: folder_id,
            }))?;
    }
    let character = CharacterRepo::create(&state.pool, &input, viewer.user_id()).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// PUT /api/v1/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
    }
}

/// Shared guard for the nested sheet collection: 404 unless the character
/// exists.
pub async fn ensure_character_exists(state: &AppState, id: DbId) -> AppResult<()> {
    CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(())
}
