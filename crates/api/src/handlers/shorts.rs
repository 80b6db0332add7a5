//! Handlers for shorts projects and their nested characters and scenes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::shorts::{
    CreateShortsCharacter, CreateShortsProject, CreateShortsScene, ShortsCharacter, ShortsProject,
    ShortsScene, UpdateShortsCharacter, UpdateShortsProject, UpdateShortsScene,
};
use cutroom_db::repositories::{ShortsCharacterRepo, ShortsRepo, ShortsSceneRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// GET /api/v1/shorts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShortsProject>>> {
    let projects = ShortsRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/v1/shorts
pub async fn create(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Json(input): Json<CreateShortsProject>,
) -> AppResult<(StatusCode, Json<ShortsProject>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    let project = ShortsRepo::create(&state.pool, &input, viewer.user_id()).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/shorts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShortsProject>> {
    let project = ShortsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsProject",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/shorts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShortsProject>,
) -> AppResult<Json<ShortsProject>> {
    let project = ShortsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsProject",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/shorts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShortsRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ShortsProject",
            id,
        }))
    }
}

async fn ensure_shorts_exists(state: &AppState, id: DbId) -> AppResult<()> {
    ShortsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsProject",
            id,
        }))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// GET /api/v1/shorts/{id}/characters
pub async fn list_characters(
    State(state): State<AppState>,
    Path(shorts_id): Path<DbId>,
) -> AppResult<Json<Vec<ShortsCharacter>>> {
    ensure_shorts_exists(&state, shorts_id).await?;
    let characters = ShortsCharacterRepo::list_by_shorts(&state.pool, shorts_id).await?;
    Ok(Json(characters))
}

/// POST /api/v1/shorts/{id}/characters
pub async fn create_character(
    State(state): State<AppState>,
    Path(shorts_id): Path<DbId>,
    Json(mut input): Json<CreateShortsCharacter>,
) -> AppResult<(StatusCode, Json<ShortsCharacter>)> {
    ensure_shorts_exists(&state, shorts_id).await?;
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    input.shorts_id = shorts_id;
    let character = ShortsCharacterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /api/v1/shorts/{id}/characters/{character_id}
pub async fn update_character(
    State(state): State<AppState>,
    Path((shorts_id, character_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateShortsCharacter>,
) -> AppResult<Json<ShortsCharacter>> {
    ShortsCharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .filter(|c| c.shorts_id == shorts_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsCharacter",
            id: character_id,
        }))?;
    let updated = ShortsCharacterRepo::update(&state.pool, character_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsCharacter",
            id: character_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/shorts/{id}/characters/{character_id}
pub async fn delete_character(
    State(state): State<AppState>,
    Path((shorts_id, character_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ShortsCharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .filter(|c| c.shorts_id == shorts_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsCharacter",
            id: character_id,
        }))?;
    ShortsCharacterRepo::delete(&state.pool, character_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Scenes
// ---------------------------------------------------------------------------

/// GET /api/v1/shorts/{id}/scenes
pub async fn list_scenes(
    State(state): State<AppState>,
    Path(shorts_id): Path<DbId>,
) -> AppResult<Json<Vec<ShortsScene>>> {
    ensure_shorts_exists(&state, shorts_id).await?;
    let scenes = ShortsSceneRepo::list_by_shorts(&state.pool, shorts_id).await?;
    Ok(Json(scenes))
}

/// POST /api/v1/shorts/{id}/scenes
pub async fn create_scene(
    State(state): State<AppState>,
    Path(shorts_id): Path<DbId>,
    Json(mut input): Json<CreateShortsScene>,
) -> AppResult<(StatusCode, Json<ShortsScene>)> {
    ensure_shorts_exists(&state, shorts_id).await?;
    input.shorts_id = shorts_id;
    let scene = ShortsSceneRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(scene)))
}

/// PUT /api/v1/shorts/{id}/scenes/{scene_id}
pub async fn update_scene(
    State(state): State<AppState>,
    Path((shorts_id, scene_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateShortsScene>,
) -> AppResult<Json<ShortsScene>> {
    ShortsSceneRepo::find_by_id(&state.pool, scene_id)
        .await?
        .filter(|s| s.shorts_id == shorts_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsScene",
            id: scene_id,
        }))?;
    let updated = ShortsSceneRepo::update(&state.pool, scene_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsScene",
            id: scene_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/shorts/{id}/scenes/{scene_id}
pub async fn delete_scene(
    State(state): State<AppState>,
    Path((shorts_id, scene_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ShortsSceneRepo::find_by_id(&state.pool, scene_id)
        .await?
        .filter(|s| s.shorts_id == shorts_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShortsScene",
            id: scene_id,
        }))?;
    ShortsSceneRepo::delete(&state.pool, scene_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
