//! Stored file model and DTOs.
//!
//! File rows track assets in object storage (or hosted externally, in which
//! case `storage_key` is NULL). Generated assets start life as temporary
//! rows (`is_temp = true`) and are promoted into a pipeline stage later;
//! `source_file_id` records which asset a derived file was generated from.

use cutroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file row from the `files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredFile {
    pub id: DbId,
    pub storage_key: Option<String>,
    pub url: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub original_name: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_temp: bool,
    pub process_id: Option<String>,
    pub source_file_id: Option<DbId>,
    pub is_public: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new file row.
#[derive(Debug, Clone)]
pub struct CreateFile {
    pub storage_key: Option<String>,
    pub url: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub original_name: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_temp: bool,
    pub source_file_id: Option<DbId>,
    pub is_public: bool,
    pub created_by: Option<DbId>,
}

/// Request body for `POST /files/{id}/promote`.
///
/// `process_id` is the only required field; promotion fails with a 400 when
/// it is missing or empty and the row is left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct PromoteFile {
    pub process_id: Option<String>,
}

/// One entry of a batched derived-file count response.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedFileCount {
    pub source_file_id: DbId,
    pub count: i64,
}
