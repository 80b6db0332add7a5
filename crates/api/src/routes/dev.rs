//! Route definitions for the development-only endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::dev;
use crate::state::AppState;

/// Routes mounted at `/dev`. The handlers answer 404 outside the
/// `development` environment.
///
/// ```text
/// GET /session -> session (?user_id=…)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(dev::session))
}
