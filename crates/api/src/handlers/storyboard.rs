//! Handlers for storyboards (`/episodes/{id}/storyboards` and
//! `/storyboards/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::storyboard::{CreateStoryboard, Storyboard, UpdateStoryboard};
use cutroom_db::repositories::StoryboardRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::episode::ensure_episode_exists;
use crate::state::AppState;

/// GET /api/v1/episodes/{id}/storyboards
pub async fn list_by_episode(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
) -> AppResult<Json<Vec<Storyboard>>> {
    ensure_episode_exists(&state, episode_id).await?;
    let storyboards = StoryboardRepo::list_by_episode(&state.pool, episode_id).await?;
    Ok(Json(storyboards))
}

/// POST /api/v1/episodes/{id}/storyboards
pub async fn create(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
    Json(mut input): Json<CreateStoryboard>,
) -> AppResult<(StatusCode, Json<Storyboard>)> {
    ensure_episode_exists(&state, episode_id).await?;
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    input.episode_id = episode_id;
    let storyboard = StoryboardRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(storyboard)))
}

/// GET /api/v1/storyboards/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Storyboard>> {
    let storyboard = StoryboardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))?;
    Ok(Json(storyboard))
}

/// PUT /api/v1/storyboards/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStoryboard>,
) -> AppResult<Json<Storyboard>> {
    let storyboard = StoryboardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))?;
    Ok(Json(storyboard))
}

/// DELETE /api/v1/storyboards/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StoryboardRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))
    }
}

/// Shared guard for the nested panel collection: 404 unless the storyboard
/// exists.
pub async fn ensure_storyboard_exists(state: &AppState, id: DbId) -> AppResult<()> {
    StoryboardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Storyboard",
            id,
        }))?;
    Ok(())
}
