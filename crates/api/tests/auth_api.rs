//! Integration tests for registration, login, refresh rotation, and
//! logout.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_tokens_and_creator_role(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({
            "username": "mina",
            "password": "a-strong-password",
            "display_name": "Mina"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert!(!json["access_token"].as_str().unwrap().is_empty());
    assert!(!json["refresh_token"].as_str().unwrap().is_empty());
    assert_eq!(json["user"]["username"], "mina");
    assert_eq!(json["user"]["role"], "creator");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/auth/register",
        serde_json::json!({ "username": "mina", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("at least"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_username_conflicts(pool: PgPool) {
    let body = serde_json::json!({ "username": "mina", "password": "a-strong-password" });

    let app = common::build_test_app(pool.clone());
    let first = common::post_json(app, "/api/v1/auth/register", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = common::post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_rejects_wrong_password(pool: PgPool) {
    let (_user, _password) = common::create_user(&pool, "mina", "creator").await;

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "mina", "password": "not-the-password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    let (_user, password) = common::create_user(&pool, "mina", "creator").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "mina", "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let login = common::body_json(response).await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and returns a different token.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = common::body_json(response).await;
    assert_ne!(refreshed["refresh_token"].as_str().unwrap(), refresh_token);

    // The consumed token is revoked; replaying it fails.
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_all_sessions(pool: PgPool) {
    let (_user, password) = common::create_user(&pool, "mina", "creator").await;

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "mina", "password": password }),
    )
    .await;
    let login = common::body_json(response).await;
    let access_token = login["access_token"].as_str().unwrap().to_string();
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = common::post_json_auth(
        app,
        "/api/v1/auth/logout",
        serde_json::json!({}),
        &access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token from before logout no longer works.
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(app, "/api/v1/auth/logout", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
