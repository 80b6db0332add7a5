//! User account model and DTOs.

use cutroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Role name granting full administrative access.
pub const ROLE_ADMIN: &str = "admin";
/// Default role for self-registered accounts.
pub const ROLE_CREATOR: &str = "creator";

/// A user row from the `users` table.
///
/// `password_hash` is intentionally excluded from serialization.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password is hashed before it gets here.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: String,
}
