//! Route definitions for the `/files` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::file;
use crate::state::AppState;

/// Upper bound for multipart image uploads: the 10 MB image cap plus room
/// for form-field overhead.
const UPLOAD_BODY_LIMIT: usize = 12 * 1024 * 1024;

/// Routes mounted at `/files`.
///
/// ```text
/// POST   /upload          -> upload (multipart image)
/// GET    /derived-counts  -> derived_counts (?source_ids=1,2,3)
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// POST   /{id}/promote    -> promote
/// GET    /{id}/derived    -> list_derived
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(file::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/derived-counts", get(file::derived_counts))
        .route("/{id}", get(file::get_by_id).delete(file::delete))
        .route("/{id}/promote", post(file::promote))
        .route("/{id}/derived", get(file::list_derived))
}
