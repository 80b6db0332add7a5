//! Handlers for the `/generate` proxy endpoints.
//!
//! Thin pass-throughs to the external generation provider. Image results
//! are persisted to object storage; video results keep the provider's
//! hosted URL. Either way a temporary file row is created, attributed to
//! the authenticated caller, ready for later promotion.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_core::upload::{extension_for_content_type, probe_dimensions};
use cutroom_db::models::file::{CreateFile, StoredFile};
use cutroom_db::repositories::FileRepo;
use cutroom_gen::{ImageRequest, VideoRequest};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /generate/image`.
#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// File the generation is derived from, recorded on the new row.
    pub source_file_id: Option<DbId>,
    /// Whether the resulting file is visible to other users.
    pub is_public: Option<bool>,
}

/// Request body for `POST /generate/video`.
#[derive(Debug, Deserialize)]
pub struct GenerateVideoRequest {
    pub prompt: String,
    pub duration_secs: Option<f32>,
    /// Optional image to animate; its stored URL is forwarded to the
    /// provider and the new row records it as the derivation source.
    pub image_file_id: Option<DbId>,
    pub is_public: Option<bool>,
}

/// POST /api/v1/generate/image
///
/// Calls the provider, stores the returned image bytes, and creates a
/// temporary file row owned by the caller.
pub async fn image(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<GenerateImageRequest>,
) -> AppResult<(StatusCode, Json<StoredFile>)> {
    let prompt = input.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Prompt must not be empty".into(),
        )));
    }

    if let Some(source_id) = input.source_file_id {
        FileRepo::find_by_id(&state.pool, source_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "File",
                id: source_id,
            }))?;
    }

    let generated = state
        .gen
        .generate_image(&ImageRequest {
            prompt: prompt.to_string(),
            negative_prompt: input.negative_prompt,
            width: input.width,
            height: input.height,
        })
        .await?;

    let dimensions = probe_dimensions(&generated.bytes);
    let size_bytes = generated.bytes.len() as i64;

    let key = cutroom_cloud::object_key(
        "generated",
        extension_for_content_type(&generated.mime_type),
    );
    let stored = state
        .storage
        .put(&key, generated.bytes, &generated.mime_type)
        .await?;

    let row = FileRepo::create(
        &state.pool,
        &CreateFile {
            storage_key: Some(stored.key),
            url: stored.url,
            mime_type: generated.mime_type,
            size_bytes,
            original_name: None,
            width: dimensions.map(|(w, _)| w as i32),
            height: dimensions.map(|(_, h)| h as i32),
            is_temp: true,
            source_file_id: input.source_file_id,
            is_public: input.is_public.unwrap_or(false),
            created_by: Some(user.user_id),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/generate/video
///
/// Calls the provider and records the hosted result as a temporary file
/// row; video payloads stay with the provider, so `storage_key` is NULL.
pub async fn video(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<GenerateVideoRequest>,
) -> AppResult<(StatusCode, Json<StoredFile>)> {
    let prompt = input.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Prompt must not be empty".into(),
        )));
    }

    let image_url = match input.image_file_id {
        Some(file_id) => {
            let file = FileRepo::find_by_id(&state.pool, file_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "File",
                    id: file_id,
                }))?;
            Some(file.url)
        }
        None => None,
    };

    let generated = state
        .gen
        .generate_video(&VideoRequest {
            prompt: prompt.to_string(),
            duration_secs: input.duration_secs,
            image_url,
        })
        .await?;

    let row = FileRepo::create(
        &state.pool,
        &CreateFile {
            storage_key: None,
            url: generated.video_url,
            mime_type: generated.mime_type.unwrap_or_else(|| "video/mp4".into()),
            size_bytes: 0,
            original_name: None,
            width: None,
            height: None,
            is_temp: true,
            source_file_id: input.image_file_id,
            is_public: input.is_public.unwrap_or(false),
            created_by: Some(user.user_id),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}
