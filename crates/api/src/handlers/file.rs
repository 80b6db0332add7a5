//! Handlers for the `/files` resource.
//!
//! Covers the binary image upload endpoint, the temporary-to-permanent
//! promotion step, and the derived-file queries. Promotion changes row
//! metadata only; the stored object is never relocated.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cutroom_core::error::CoreError;
use cutroom_core::types::DbId;
use cutroom_core::upload::{extension_for_content_type, probe_dimensions, validate_image_upload};
use cutroom_db::models::file::{CreateFile, DerivedFileCount, PromoteFile, StoredFile};
use cutroom_db::repositories::FileRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// Query parameters for `GET /files/derived-counts`.
#[derive(Debug, Deserialize)]
pub struct DerivedCountParams {
    /// Comma-separated source file ids, e.g. `source_ids=3,17,21`.
    pub source_ids: String,
}

/// POST /api/v1/files/upload
///
/// Multipart form with a required `file` image field (content type must
/// start with `image/`, at most 10 MB) and optional `is_public`,
/// `source_file_id`, and `process_id` text fields. The object goes to
/// storage and the row is created temporary unless a `process_id` is
/// supplied.
pub async fn upload(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<StoredFile>)> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut is_public = false;
    let mut source_file_id: Option<DbId> = None;
    let mut process_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((original_name, content_type, data.to_vec()));
            }
            "is_public" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                is_public = text == "true" || text == "1";
            }
            "source_file_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let parsed = text.parse().map_err(|_| {
                    AppError::BadRequest(format!("Invalid source_file_id '{text}'"))
                })?;
                source_file_id = Some(parsed);
            }
            "process_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !text.is_empty() {
                    process_id = Some(text);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let (original_name, content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    validate_image_upload(&content_type, bytes.len())?;

    if let Some(source_id) = source_file_id {
        FileRepo::find_by_id(&state.pool, source_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "File",
                id: source_id,
            }))?;
    }

    let dimensions = probe_dimensions(&bytes);
    let size_bytes = bytes.len() as i64;

    let key = cutroom_cloud::object_key("uploads", extension_for_content_type(&content_type));
    let stored = state.storage.put(&key, bytes, &content_type).await?;

    let row = FileRepo::create(
        &state.pool,
        &CreateFile {
            storage_key: Some(stored.key),
            url: stored.url,
            mime_type: content_type,
            size_bytes,
            original_name: Some(original_name),
            width: dimensions.map(|(w, _)| w as i32),
            height: dimensions.map(|(_, h)| h as i32),
            is_temp: process_id.is_none(),
            source_file_id,
            is_public,
            created_by: viewer.user_id(),
        },
    )
    .await?;

    // Uploads that arrive with a pipeline stage skip the temporary phase.
    let row = match process_id {
        Some(stage) => FileRepo::promote(&state.pool, row.id, &stage)
            .await?
            .unwrap_or(row),
        None => row,
    };

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/files/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StoredFile>> {
    let file = FileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "File", id }))?;
    Ok(Json(file))
}

/// DELETE /api/v1/files/{id}
///
/// Removes the stored object (when this service holds it) before the row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let file = FileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "File", id }))?;

    if let Some(key) = &file.storage_key {
        state.storage.delete(key).await?;
    }
    FileRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/files/{id}/promote
///
/// Promote a temporary file into a pipeline stage. `process_id` is the
/// only required field; a missing or empty value is a 400 and the row is
/// left untouched.
pub async fn promote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PromoteFile>,
) -> AppResult<Json<StoredFile>> {
    let process_id = input
        .process_id
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "process_id is required to promote a file".into(),
            ))
        })?;

    let file = FileRepo::promote(&state.pool, id, process_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "File", id }))?;
    Ok(Json(file))
}

/// GET /api/v1/files/{id}/derived
///
/// List the files derived from this one, visibility filtered: public rows
/// for everyone, the viewer's own non-public rows when authenticated.
pub async fn list_derived(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<StoredFile>>> {
    let derived = FileRepo::list_derived(&state.pool, id, viewer.user_id()).await?;
    Ok(Json(derived))
}

/// GET /api/v1/files/derived-counts?source_ids=1,2,3
///
/// Batched derived-file counts, visibility filtered like
/// [`list_derived`]. Every requested id appears in the response; ids with
/// no visible derived rows (including ids that do not exist) report zero.
pub async fn derived_counts(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Query(params): Query<DerivedCountParams>,
) -> AppResult<Json<Vec<DerivedFileCount>>> {
    let source_ids = parse_id_list(&params.source_ids)?;
    let counts = FileRepo::count_derived_batch(&state.pool, &source_ids, viewer.user_id()).await?;
    Ok(Json(counts))
}

/// Parse a comma-separated id list, rejecting empty input and non-numeric
/// entries.
fn parse_id_list(raw: &str) -> Result<Vec<DbId>, AppError> {
    let ids: Vec<DbId> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid source id '{s}'")))
        })
        .collect::<Result<_, _>>()?;

    if ids.is_empty() {
        return Err(AppError::BadRequest(
            "source_ids must contain at least one id".into(),
        ));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list(" 4 , 5 ").unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_parse_id_list_rejects_garbage() {
        assert!(parse_id_list("1,x,3").is_err());
        assert!(parse_id_list("").is_err());
        assert!(parse_id_list(" , ").is_err());
    }
}
