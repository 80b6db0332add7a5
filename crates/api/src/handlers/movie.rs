//! Handlers for movie projects and their nested resources.
//!
//! Covers `/movies`, `/movies/{id}/characters`, `/movies/{id}/backgrounds`,
//! `/movies/{id}/scenes`, and `/movie-scenes/{id}/cuts`. Movie cuts carry a
//! display-order `cut_index` that is caller-managed, not reindexed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::movie::{
    CreateMovieAsset, CreateMovieCut, CreateMovieProject, CreateMovieScene, MovieBackground,
    MovieCharacter, MovieCut, MovieProject, MovieScene, UpdateMovieAsset, UpdateMovieCut,
    UpdateMovieProject, UpdateMovieScene,
};
use cutroom_db::repositories::{
    MovieBackgroundRepo, MovieCharacterRepo, MovieCutRepo, MovieRepo, MovieSceneRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieProject>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Json(input): Json<CreateMovieProject>,
) -> AppResult<(StatusCode, Json<MovieProject>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    let movie = MovieRepo::create(&state.pool, &input, viewer.user_id()).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieProject>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieProject",
            id,
        }))?;
    Ok(Json(movie))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovieProject>,
) -> AppResult<Json<MovieProject>> {
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieProject",
            id,
        }))?;
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "MovieProject",
            id,
        }))
    }
}

async fn ensure_movie_exists(state: &AppState, id: DbId) -> AppResult<()> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieProject",
            id,
        }))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// GET /api/v1/movies/{id}/characters
pub async fn list_characters(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<MovieCharacter>>> {
    ensure_movie_exists(&state, movie_id).await?;
    let characters = MovieCharacterRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(characters))
}

/// POST /api/v1/movies/{id}/characters
pub async fn create_character(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(mut input): Json<CreateMovieAsset>,
) -> AppResult<(StatusCode, Json<MovieCharacter>)> {
    ensure_movie_exists(&state, movie_id).await?;
    validate_asset_name(&input)?;
    input.movie_id = movie_id;
    let character = MovieCharacterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /api/v1/movies/{id}/characters/{character_id}
pub async fn update_character(
    State(state): State<AppState>,
    Path((movie_id, character_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMovieAsset>,
) -> AppResult<Json<MovieCharacter>> {
    let character = MovieCharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .filter(|c| c.movie_id == movie_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieCharacter",
            id: character_id,
        }))?;
    let updated = MovieCharacterRepo::update(&state.pool, character.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieCharacter",
            id: character_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/movies/{id}/characters/{character_id}
pub async fn delete_character(
    State(state): State<AppState>,
    Path((movie_id, character_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    MovieCharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .filter(|c| c.movie_id == movie_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieCharacter",
            id: character_id,
        }))?;
    MovieCharacterRepo::delete(&state.pool, character_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Backgrounds
// ---------------------------------------------------------------------------

/// GET /api/v1/movies/{id}/backgrounds
pub async fn list_backgrounds(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<MovieBackground>>> {
    ensure_movie_exists(&state, movie_id).await?;
    let backgrounds = MovieBackgroundRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(backgrounds))
}

/// POST /api/v1/movies/{id}/backgrounds
pub async fn create_background(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(mut input): Json<CreateMovieAsset>,
) -> AppResult<(StatusCode, Json<MovieBackground>)> {
    ensure_movie_exists(&state, movie_id).await?;
    validate_asset_name(&input)?;
    input.movie_id = movie_id;
    let background = MovieBackgroundRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(background)))
}

/// PUT /api/v1/movies/{id}/backgrounds/{background_id}
pub async fn update_background(
    State(state): State<AppState>,
    Path((movie_id, background_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMovieAsset>,
) -> AppResult<Json<MovieBackground>> {
    MovieBackgroundRepo::find_by_id(&state.pool, background_id)
        .await?
        .filter(|b| b.movie_id == movie_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieBackground",
            id: background_id,
        }))?;
    let updated = MovieBackgroundRepo::update(&state.pool, background_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieBackground",
            id: background_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/movies/{id}/backgrounds/{background_id}
pub async fn delete_background(
    State(state): State<AppState>,
    Path((movie_id, background_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    MovieBackgroundRepo::find_by_id(&state.pool, background_id)
        .await?
        .filter(|b| b.movie_id == movie_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieBackground",
            id: background_id,
        }))?;
    MovieBackgroundRepo::delete(&state.pool, background_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Scenes
// ---------------------------------------------------------------------------

/// GET /api/v1/movies/{id}/scenes
pub async fn list_scenes(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<MovieScene>>> {
    ensure_movie_exists(&state, movie_id).await?;
    let scenes = MovieSceneRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(scenes))
}

/// POST /api/v1/movies/{id}/scenes
pub async fn create_scene(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(mut input): Json<CreateMovieScene>,
) -> AppResult<(StatusCode, Json<MovieScene>)> {
    ensure_movie_exists(&state, movie_id).await?;
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    input.movie_id = movie_id;
    let scene = MovieSceneRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(scene)))
}

/// PUT /api/v1/movies/{id}/scenes/{scene_id}
pub async fn update_scene(
    State(state): State<AppState>,
    Path((movie_id, scene_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMovieScene>,
) -> AppResult<Json<MovieScene>> {
    MovieSceneRepo::find_by_id(&state.pool, scene_id)
        .await?
        .filter(|s| s.movie_id == movie_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieScene",
            id: scene_id,
        }))?;
    let updated = MovieSceneRepo::update(&state.pool, scene_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieScene",
            id: scene_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/movies/{id}/scenes/{scene_id}
pub async fn delete_scene(
    State(state): State<AppState>,
    Path((movie_id, scene_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    MovieSceneRepo::find_by_id(&state.pool, scene_id)
        .await?
        .filter(|s| s.movie_id == movie_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieScene",
            id: scene_id,
        }))?;
    MovieSceneRepo::delete(&state.pool, scene_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Scene cuts (mounted at /movie-scenes/{id}/cuts)
// ---------------------------------------------------------------------------

/// GET /api/v1/movie-scenes/{id}/cuts
pub async fn list_scene_cuts(
    State(state): State<AppState>,
    Path(scene_id): Path<DbId>,
) -> AppResult<Json<Vec<MovieCut>>> {
    ensure_scene_exists(&state, scene_id).await?;
    let cuts = MovieCutRepo::list_by_scene(&state.pool, scene_id).await?;
    Ok(Json(cuts))
}

/// POST /api/v1/movie-scenes/{id}/cuts
pub async fn create_scene_cut(
    State(state): State<AppState>,
    Path(scene_id): Path<DbId>,
    Json(mut input): Json<CreateMovieCut>,
) -> AppResult<(StatusCode, Json<MovieCut>)> {
    ensure_scene_exists(&state, scene_id).await?;
    input.scene_id = scene_id;
    let cut = MovieCutRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cut)))
}

/// PUT /api/v1/movie-scenes/{id}/cuts/{cut_id}
pub async fn update_scene_cut(
    State(state): State<AppState>,
    Path((scene_id, cut_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMovieCut>,
) -> AppResult<Json<MovieCut>> {
    MovieCutRepo::find_by_id(&state.pool, cut_id)
        .await?
        .filter(|c| c.scene_id == scene_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieCut",
            id: cut_id,
        }))?;
    let updated = MovieCutRepo::update(&state.pool, cut_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieCut",
            id: cut_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/movie-scenes/{id}/cuts/{cut_id}
pub async fn delete_scene_cut(
    State(state): State<AppState>,
    Path((scene_id, cut_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    MovieCutRepo::find_by_id(&state.pool, cut_id)
        .await?
        .filter(|c| c.scene_id == scene_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieCut",
            id: cut_id,
        }))?;
    MovieCutRepo::delete(&state.pool, cut_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_scene_exists(state: &AppState, id: DbId) -> AppResult<()> {
    MovieSceneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieScene",
            id,
        }))?;
    Ok(())
}

fn validate_asset_name(input: &CreateMovieAsset) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    Ok(())
}
