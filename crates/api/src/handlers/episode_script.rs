//! Handlers for `/episodes/{id}/scripts`, the ordered script collection.
//!
//! `order_index` is dense and zero-based; the repository keeps it that way
//! through insert, delete, and reorder. The reorder endpoint takes the full
//! permutation of script ids and applies it all-or-nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::ordering::validate_permutation;
use cutroom_core::types::DbId;
use cutroom_db::models::script::{
    CreateEpisodeScript, EpisodeScript, ReorderScripts, UpdateEpisodeScript,
};
use cutroom_db::repositories::EpisodeScriptRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::episode::ensure_episode_exists;
use crate::state::AppState;

/// GET /api/v1/episodes/{id}/scripts
pub async fn list(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
) -> AppResult<Json<Vec<EpisodeScript>>> {
    ensure_episode_exists(&state, episode_id).await?;
    let scripts = EpisodeScriptRepo::list_by_episode(&state.pool, episode_id).await?;
    Ok(Json(scripts))
}

/// POST /api/v1/episodes/{id}/scripts
///
/// `order_index` selects the insert position; omitted appends,
/// out-of-range values are clamped. Siblings at or above the position are
/// shifted up to make room.
pub async fn create(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
    Json(mut input): Json<CreateEpisodeScript>,
) -> AppResult<(StatusCode, Json<EpisodeScript>)> {
    ensure_episode_exists(&state, episode_id).await?;
    input.episode_id = episode_id;
    let script = EpisodeScriptRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(script)))
}

/// PUT /api/v1/episodes/{id}/scripts/reorder
///
/// The body must list every script id of the episode exactly once; each
/// id's stored `order_index` becomes its position in the list. Anything
/// that is not an exact permutation of the current ids is a 400 and
/// nothing is written.
pub async fn reorder(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
    Json(input): Json<ReorderScripts>,
) -> AppResult<Json<Vec<EpisodeScript>>> {
    ensure_episode_exists(&state, episode_id).await?;

    let existing = EpisodeScriptRepo::list_ids_by_episode(&state.pool, episode_id).await?;
    validate_permutation(&existing, &input.script_ids)?;

    EpisodeScriptRepo::reorder(&state.pool, episode_id, &input.script_ids).await?;

    let scripts = EpisodeScriptRepo::list_by_episode(&state.pool, episode_id).await?;
    Ok(Json(scripts))
}

/// PUT /api/v1/episodes/{id}/scripts/{script_id}
pub async fn update(
    State(state): State<AppState>,
    Path((episode_id, script_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateEpisodeScript>,
) -> AppResult<Json<EpisodeScript>> {
    let script = find_in_episode(&state, episode_id, script_id).await?;
    let updated = EpisodeScriptRepo::update(&state.pool, script.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EpisodeScript",
            id: script_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/episodes/{id}/scripts/{script_id}
///
/// Siblings above the removed position shift down to close the gap.
pub async fn delete(
    State(state): State<AppState>,
    Path((episode_id, script_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_in_episode(&state, episode_id, script_id).await?;
    EpisodeScriptRepo::delete(&state.pool, script_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a script and confirm it belongs to the episode in the path.
async fn find_in_episode(
    state: &AppState,
    episode_id: DbId,
    script_id: DbId,
) -> AppResult<EpisodeScript> {
    let script = EpisodeScriptRepo::find_by_id(&state.pool, script_id)
        .await?
        .filter(|s| s.episode_id == episode_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EpisodeScript",
            id: script_id,
        }))?;
    Ok(script)
}
