//! Handlers for the `/announcements` resource.
//!
//! Reads are public; mutations require the admin role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use cutroom_db::repositories::AnnouncementRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/announcements
///
/// Pinned announcements come first, newest first within each group.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = AnnouncementRepo::list(&state.pool).await?;
    Ok(Json(announcements))
}

/// GET /api/v1/announcements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// POST /api/v1/announcements (admin only)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    user.require_admin()?;
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    let announcement = AnnouncementRepo::create(&state.pool, &input, Some(user.user_id)).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /api/v1/announcements/{id} (admin only)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    user.require_admin()?;
    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))?;
    Ok(Json(announcement))
}

/// DELETE /api/v1/announcements/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    user.require_admin()?;
    let deleted = AnnouncementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Announcement",
            id,
        }))
    }
}
