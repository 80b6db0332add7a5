//! Development-only session injection endpoint.
//!
//! `GET /dev/session?user_id=…` serves an HTML page that writes a freshly
//! signed access token for the chosen user into the browser's local
//! storage, so a frontend under development can assume any identity
//! without going through the login flow. Outside the `development`
//! environment the endpoint answers 404 as if it did not exist.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /dev/session`.
#[derive(Debug, Deserialize)]
pub struct DevSessionParams {
    pub user_id: DbId,
}

/// GET /dev/session?user_id=…
pub async fn session(
    State(state): State<AppState>,
    Query(params): Query<DevSessionParams>,
) -> AppResult<Response> {
    if !state.config.is_development() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let user = UserRepo::find_by_id(&state.pool, params.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: params.user_id,
        }))?;

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let page = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>dev session</title></head>
<body>
<p>Signed in as <strong>{username}</strong> (id {id}, role {role}).</p>
<script>
localStorage.setItem("access_token", "{token}");
</script>
</body>
</html>
"#,
        username = user.username,
        id = user.id,
        role = user.role,
    );

    Ok(Html(page).into_response())
}
