//! Route definitions for the `/webtoons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::webtoon;
use crate::state::AppState;

/// Routes mounted at `/webtoons`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/episodes  -> list_episodes
/// POST   /{id}/episodes  -> create_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(webtoon::list).post(webtoon::create))
        .route(
            "/{id}",
            get(webtoon::get_by_id)
                .put(webtoon::update)
                .delete(webtoon::delete),
        )
        .route(
            "/{id}/episodes",
            get(webtoon::list_episodes).post(webtoon::create_episode),
        )
}
