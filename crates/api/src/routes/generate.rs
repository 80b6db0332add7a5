//! Route definitions for the `/generate` proxy endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Routes mounted at `/generate`. Both require authentication.
///
/// ```text
/// POST /image -> image
/// POST /video -> video
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/image", post(generate::image))
        .route("/video", post(generate::video))
}
