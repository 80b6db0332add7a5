//! Route definitions for `/characters` and `/character-folders`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{character, character_folder, character_sheet};
use crate::state::AppState;

/// Routes mounted at `/character-folders`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn folders_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(character_folder::list).post(character_folder::create),
        )
        .route(
            "/{id}",
            get(character_folder::get_by_id)
                .put(character_folder::update)
                .delete(character_folder::delete),
        )
}

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                          -> list (?folder_id=…)
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/sheets               -> sheets list
/// POST   /{id}/sheets               -> sheets create
/// PUT    /{id}/sheets/{sheet_id}    -> sheets update
/// DELETE /{id}/sheets/{sheet_id}    -> sheets delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
        .route(
            "/{id}/sheets",
            get(character_sheet::list).post(character_sheet::create),
        )
        .route(
            "/{id}/sheets/{sheet_id}",
            put(character_sheet::update).delete(character_sheet::delete),
        )
}
