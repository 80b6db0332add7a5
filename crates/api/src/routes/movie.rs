//! Route definitions for `/movies` and `/movie-scenes`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /{id}/characters                   -> list_characters
/// POST   /{id}/characters                   -> create_character
/// PUT    /{id}/characters/{character_id}    -> update_character
/// DELETE /{id}/characters/{character_id}    -> delete_character
/// GET    /{id}/backgrounds                  -> list_backgrounds
/// POST   /{id}/backgrounds                  -> create_background
/// PUT    /{id}/backgrounds/{background_id}  -> update_background
/// DELETE /{id}/backgrounds/{background_id}  -> delete_background
/// GET    /{id}/scenes                       -> list_scenes
/// POST   /{id}/scenes                       -> create_scene
/// PUT    /{id}/scenes/{scene_id}            -> update_scene
/// DELETE /{id}/scenes/{scene_id}            -> delete_scene
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
        .route(
            "/{id}/characters",
            get(movie::list_characters).post(movie::create_character),
        )
        .route(
            "/{id}/characters/{character_id}",
            put(movie::update_character).delete(movie::delete_character),
        )
        .route(
            "/{id}/backgrounds",
            get(movie::list_backgrounds).post(movie::create_background),
        )
        .route(
            "/{id}/backgrounds/{background_id}",
            put(movie::update_background).delete(movie::delete_background),
        )
        .route(
            "/{id}/scenes",
            get(movie::list_scenes).post(movie::create_scene),
        )
        .route(
            "/{id}/scenes/{scene_id}",
            put(movie::update_scene).delete(movie::delete_scene),
        )
}

/// Routes mounted at `/movie-scenes`.
///
/// ```text
/// GET    /{id}/cuts            -> list_scene_cuts
/// POST   /{id}/cuts            -> create_scene_cut
/// PUT    /{id}/cuts/{cut_id}   -> update_scene_cut
/// DELETE /{id}/cuts/{cut_id}   -> delete_scene_cut
/// ```
pub fn scenes_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/cuts",
            get(movie::list_scene_cuts).post(movie::create_scene_cut),
        )
        .route(
            "/{id}/cuts/{cut_id}",
            put(movie::update_scene_cut).delete(movie::delete_scene_cut),
        )
}
