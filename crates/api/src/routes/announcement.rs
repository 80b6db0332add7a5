//! Route definitions for the `/announcements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

/// Routes mounted at `/announcements`. Reads are public; mutations are
/// admin-only (enforced in the handlers).
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(announcement::list).post(announcement::create))
        .route(
            "/{id}",
            get(announcement::get_by_id)
                .put(announcement::update)
                .delete(announcement::delete),
        )
}
