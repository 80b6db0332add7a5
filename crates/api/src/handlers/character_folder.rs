//! Handlers for the `/character-folders` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::character::{
    CharacterFolder, CreateCharacterFolder, UpdateCharacterFolder,
};
use cutroom_db::repositories::CharacterFolderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// GET /api/v1/character-folders
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CharacterFolder>>> {
    let folders = CharacterFolderRepo::list(&state.pool).await?;
    Ok(Json(folders))
}

/// POST /api/v1/character-folders
pub async fn create(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Json(input): Json<CreateCharacterFolder>,
) -> AppResult<(StatusCode, Json<CharacterFolder>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    let folder = CharacterFolderRepo::create(&state.pool, &input, viewer.user_id()).await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// GET /api/v1/character-folders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterFolder>> {
    let folder = CharacterFolderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CharacterFolder",
            id,
        }))?;
    Ok(Json(folder))
}

/// PUT /api/v1/character-folders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacterFolder>,
) -> AppResult<Json<CharacterFolder>> {
    let folder = CharacterFolderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CharacterFolder",
            id,
        }))?;
    Ok(Json(folder))
}

/// DELETE /api/v1/character-folders/{id}
///
/// Characters in the folder are kept; their `folder_id` is nulled by the
/// foreign key.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CharacterFolderRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CharacterFolder",
            id,
        }))
    }
}
