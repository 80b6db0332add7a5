//! Handlers for `/episodes/{id}/cuts`, the ordered cut list of an episode.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::cut::{CreateCut, Cut, UpdateCut};
use cutroom_db::repositories::CutRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::episode::ensure_episode_exists;
use crate::state::AppState;

/// GET /api/v1/episodes/{id}/cuts
pub async fn list(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
) -> AppResult<Json<Vec<Cut>>> {
    ensure_episode_exists(&state, episode_id).await?;
    let cuts = CutRepo::list_by_episode(&state.pool, episode_id).await?;
    Ok(Json(cuts))
}

/// POST /api/v1/episodes/{id}/cuts
///
/// `cut_index` selects the insert position; omitted appends. Siblings at
/// or above the position shift up to make room.
pub async fn create(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
    Json(mut input): Json<CreateCut>,
) -> AppResult<(StatusCode, Json<Cut>)> {
    ensure_episode_exists(&state, episode_id).await?;
    input.episode_id = episode_id;
    let cut = CutRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cut)))
}

/// PUT /api/v1/episodes/{id}/cuts/{cut_id}
pub async fn update(
    State(state): State<AppState>,
    Path((episode_id, cut_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCut>,
) -> AppResult<Json<Cut>> {
    find_in_episode(&state, episode_id, cut_id).await?;
    let updated = CutRepo::update(&state.pool, cut_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cut",
            id: cut_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/episodes/{id}/cuts/{cut_id}
///
/// Siblings above the removed position shift down to close the gap.
pub async fn delete(
    State(state): State<AppState>,
    Path((episode_id, cut_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_in_episode(&state, episode_id, cut_id).await?;
    CutRepo::delete(&state.pool, cut_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a cut and confirm it belongs to the episode in the path.
async fn find_in_episode(state: &AppState, episode_id: DbId, cut_id: DbId) -> AppResult<Cut> {
    let cut = CutRepo::find_by_id(&state.pool, cut_id)
        .await?
        .filter(|c| c.episode_id == episode_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cut",
            id: cut_id,
        }))?;
    Ok(cut)
}
