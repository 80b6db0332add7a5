//! Route definitions for the `/shorts` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::shorts;
use crate::state::AppState;

/// Routes mounted at `/shorts`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
/// GET    /{id}/characters                 -> list_characters
/// POST   /{id}/characters                 -> create_character
/// PUT    /{id}/characters/{character_id}  -> update_character
/// DELETE /{id}/characters/{character_id}  -> delete_character
/// GET    /{id}/scenes                     -> list_scenes
/// POST   /{id}/scenes                     -> create_scene
/// PUT    /{id}/scenes/{scene_id}          -> update_scene
/// DELETE /{id}/scenes/{scene_id}          -> delete_scene
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shorts::list).post(shorts::create))
        .route(
            "/{id}",
            get(shorts::get_by_id)
                .put(shorts::update)
                .delete(shorts::delete),
        )
        .route(
            "/{id}/characters",
            get(shorts::list_characters).post(shorts::create_character),
        )
        .route(
            "/{id}/characters/{character_id}",
            put(shorts::update_character).delete(shorts::delete_character),
        )
        .route(
            "/{id}/scenes",
            get(shorts::list_scenes).post(shorts::create_scene),
        )
        .route(
            "/{id}/scenes/{scene_id}",
            put(shorts::update_scene).delete(shorts::delete_scene),
        )
}
