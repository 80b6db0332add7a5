//! Route definitions for the `/storyboards` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{storyboard, storyboard_cut};
use crate::state::AppState;

/// Upper bound for multipart panel uploads: the 10 MB image cap plus room
/// for form-field overhead.
const UPLOAD_BODY_LIMIT: usize = 12 * 1024 * 1024;

/// Upper bound for JSON panel bodies; base64 inflates a 10 MB image by
/// about a third.
const JSON_PANEL_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Routes mounted at `/storyboards`.
///
/// ```text
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /{id}/cuts              -> panels list
/// POST   /{id}/cuts              -> panels create (insert-at, base64 body)
/// POST   /{id}/cuts/upload       -> panels create (multipart image)
/// PUT    /{id}/cuts/{cut_id}     -> panels update
/// DELETE /{id}/cuts/{cut_id}     -> panels delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(storyboard::get_by_id)
                .put(storyboard::update)
                .delete(storyboard::delete),
        )
        .route(
            "/{id}/cuts",
            get(storyboard_cut::list)
                .post(storyboard_cut::create)
                .layer(DefaultBodyLimit::max(JSON_PANEL_BODY_LIMIT)),
        )
        .route(
            "/{id}/cuts/upload",
            post(storyboard_cut::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/{id}/cuts/{cut_id}",
            put(storyboard_cut::update).delete(storyboard_cut::delete),
        )
}
