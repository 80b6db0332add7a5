//! Route definitions for the `/episodes` resource and its ordered
//! collections.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{cut, episode, episode_script, storyboard};
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// GET    /{id}                       -> get_by_id
/// PUT    /{id}                       -> update
/// DELETE /{id}                       -> delete
/// GET    /{id}/scripts               -> scripts list
/// POST   /{id}/scripts               -> scripts create (insert-at)
/// PUT    /{id}/scripts/reorder       -> apply full permutation
/// PUT    /{id}/scripts/{script_id}   -> scripts update
/// DELETE /{id}/scripts/{script_id}   -> scripts delete
/// GET    /{id}/cuts                  -> cuts list
/// POST   /{id}/cuts                  -> cuts create (insert-at)
/// PUT    /{id}/cuts/{cut_id}         -> cuts update
/// DELETE /{id}/cuts/{cut_id}         -> cuts delete
/// GET    /{id}/storyboards           -> storyboards list
/// POST   /{id}/storyboards           -> storyboards create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(episode::get_by_id)
                .put(episode::update)
                .delete(episode::delete),
        )
        .route(
            "/{id}/scripts",
            get(episode_script::list).post(episode_script::create),
        )
        .route("/{id}/scripts/reorder", put(episode_script::reorder))
        .route(
            "/{id}/scripts/{script_id}",
            put(episode_script::update).delete(episode_script::delete),
        )
        .route("/{id}/cuts", get(cut::list).post(cut::create))
        .route("/{id}/cuts/{cut_id}", put(cut::update).delete(cut::delete))
        .route(
            "/{id}/storyboards",
            get(storyboard::list_by_episode).post(storyboard::create),
        )
}
