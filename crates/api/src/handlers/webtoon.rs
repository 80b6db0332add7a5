//! Handlers for the `/webtoons` resource and its nested episodes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::webtoon::{CreateEpisode, CreateWebtoon, Episode, UpdateWebtoon, Webtoon};
use cutroom_db::repositories::{EpisodeRepo, WebtoonRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// GET /api/v1/webtoons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Webtoon>>> {
    let webtoons = WebtoonRepo::list(&state.pool).await?;
    Ok(Json(webtoons))
}

/// POST /api/v1/webtoons
pub async fn create(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Json(input): Json<CreateWebtoon>,
) -> AppResult<(StatusCode, Json<Webtoon>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    let webtoon = WebtoonRepo::create(&state.pool, &input, viewer.user_id()).await?;
    Ok((StatusCode::CREATED, Json(webtoon)))
}

/// GET /api/v1/webtoons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Webtoon>> {
    let webtoon = WebtoonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webtoon",
            id,
        }))?;
    Ok(Json(webtoon))
}

/// PUT /api/v1/webtoons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWebtoon>,
) -> AppResult<Json<Webtoon>> {
    let webtoon = WebtoonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webtoon",
            id,
        }))?;
    Ok(Json(webtoon))
}

/// DELETE /api/v1/webtoons/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WebtoonRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Webtoon",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Nested episodes
// ---------------------------------------------------------------------------

/// GET /api/v1/webtoons/{id}/episodes
pub async fn list_episodes(
    State(state): State<AppState>,
    Path(webtoon_id): Path<DbId>,
) -> AppResult<Json<Vec<Episode>>> {
    ensure_webtoon_exists(&state, webtoon_id).await?;
    let episodes = EpisodeRepo::list_by_webtoon(&state.pool, webtoon_id).await?;
    Ok(Json(episodes))
}

/// POST /api/v1/webtoons/{id}/episodes
///
/// A duplicate `episode_no` within the webtoon is a 409.
pub async fn create_episode(
    State(state): State<AppState>,
    Path(webtoon_id): Path<DbId>,
    Json(mut input): Json<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    ensure_webtoon_exists(&state, webtoon_id).await?;
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    input.webtoon_id = webtoon_id;
    let episode = EpisodeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

async fn ensure_webtoon_exists(state: &AppState, id: DbId) -> AppResult<()> {
    WebtoonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Webtoon",
            id,
        }))?;
    Ok(())
}
