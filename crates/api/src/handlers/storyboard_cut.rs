//! Handlers for `/storyboards/{id}/cuts`, the ordered panel images.
//!
//! Panel payloads live in-row as base64 text. JSON clients send the base64
//! directly; the multipart upload endpoint accepts raw image bytes and
//! encodes them before insert.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_core::upload::validate_image_upload;
use cutroom_db::models::storyboard::{CreateStoryboardCut, StoryboardCut, UpdateStoryboardCut};
use cutroom_db::repositories::StoryboardCutRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::storyboard::ensure_storyboard_exists;
use crate::state::AppState;

/// GET /api/v1/storyboards/{id}/cuts
pub async fn list(
    State(state): State<AppState>,
    Path(storyboard_id): Path<DbId>,
) -> AppResult<Json<Vec<StoryboardCut>>> {
    ensure_storyboard_exists(&state, storyboard_id).await?;
    let cuts = StoryboardCutRepo::list_by_storyboard(&state.pool, storyboard_id).await?;
    Ok(Json(cuts))
}

/// POST /api/v1/storyboards/{id}/cuts
///
/// `cut_index` selects the insert position; omitted appends. Siblings at
/// or above the position shift up to make room.
pub async fn create(
    State(state): State<AppState>,
    Path(storyboard_id): Path<DbId>,
    Json(mut input): Json<CreateStoryboardCut>,
) -> AppResult<(StatusCode, Json<StoryboardCut>)> {
    ensure_storyboard_exists(&state, storyboard_id).await?;
    if input.image_data.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "image_data must not be empty".into(),
        )));
    }
    if BASE64.decode(&input.image_data).is_err() {
        return Err(AppError::Core(CoreError::Validation(
            "image_data must be valid base64".into(),
        )));
    }
    input.storyboard_id = storyboard_id;
    let cut = StoryboardCutRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cut)))
}

/// POST /api/v1/storyboards/{id}/cuts/upload
///
/// Multipart variant of panel creation: a required `file` image field plus
/// optional `cut_index` and `caption` fields. The image bytes are base64
/// encoded into the row.
pub async fn upload(
    State(state): State<AppState>,
    Path(storyboard_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<StoryboardCut>)> {
    ensure_storyboard_exists(&state, storyboard_id).await?;

    let mut image: Option<(String, Vec<u8>)> = None;
    let mut cut_index: Option<i32> = None;
    let mut caption: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image = Some((content_type, data.to_vec()));
            }
            "cut_index" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let parsed = text
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("Invalid cut_index '{text}'")))?;
                cut_index = Some(parsed);
            }
            "caption" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                caption = Some(text);
            }
            _ => {} // ignore unknown fields
        }
    }

    let (content_type, bytes) =
        image.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    validate_image_upload(&content_type, bytes.len())?;

    let input = CreateStoryboardCut {
        storyboard_id,
        cut_index,
        image_data: BASE64.encode(&bytes),
        mime_type: Some(content_type),
        caption,
    };
    let cut = StoryboardCutRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cut)))
}

/// PUT /api/v1/storyboards/{id}/cuts/{cut_id}
pub async fn update(
    State(state): State<AppState>,
    Path((storyboard_id, cut_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateStoryboardCut>,
) -> AppResult<Json<StoryboardCut>> {
    find_in_storyboard(&state, storyboard_id, cut_id).await?;
    let updated = StoryboardCutRepo::update(&state.pool, cut_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StoryboardCut",
            id: cut_id,
        }))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/storyboards/{id}/cuts/{cut_id}
///
/// Siblings above the removed position shift down to close the gap.
pub async fn delete(
    State(state): State<AppState>,
    Path((storyboard_id, cut_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_in_storyboard(&state, storyboard_id, cut_id).await?;
    StoryboardCutRepo::delete(&state.pool, cut_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Look up a panel and confirm it belongs to the storyboard in the path.
async fn find_in_storyboard(
    state: &AppState,
    storyboard_id: DbId,
    cut_id: DbId,
) -> AppResult<StoryboardCut> {
    let cut = StoryboardCutRepo::find_by_id(&state.pool, cut_id)
        .await?
        .filter(|c| c.storyboard_id == storyboard_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StoryboardCut",
            id: cut_id,
        }))?;
    Ok(cut)
}
