//! Integration tests for the generation proxy endpoints.
//!
//! The test app points its generation client at a connection-refused
//! endpoint, so provider-failure handling is exercised without a real
//! provider.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn generation_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/generate/image",
        serde_json::json!({ "prompt": "a rooftop chase at dusk" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/generate/video",
        serde_json::json!({ "prompt": "a rooftop chase at dusk" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generation_rejects_empty_prompts(pool: PgPool) {
    let (_user, password) = common::create_user(&pool, "mina", "creator").await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "mina", &password).await;

    let app = common::build_test_app(pool);
    let response = common::post_json_auth(
        app,
        "/api/v1/generate/image",
        serde_json::json!({ "prompt": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn provider_failure_surfaces_as_internal_error(pool: PgPool) {
    let (_user, password) = common::create_user(&pool, "mina", "creator").await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "mina", &password).await;

    // All retries hit the refused connection, then the failure surfaces as
    // a generic 500 with the standard error envelope.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json_auth(
        app,
        "/api/v1/generate/image",
        serde_json::json!({ "prompt": "a rooftop chase at dusk" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");

    // No file row was created for the failed generation.
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/files/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_generation_validates_source_file(pool: PgPool) {
    let (_user, password) = common::create_user(&pool, "mina", "creator").await;
    let app = common::build_test_app(pool.clone());
    let token = common::login_for_token(app, "mina", &password).await;

    // A missing derivation source is rejected before the provider is
    // called.
    let app = common::build_test_app(pool);
    let response = common::post_json_auth(
        app,
        "/api/v1/generate/image",
        serde_json::json!({ "prompt": "portrait", "source_file_id": 999999 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
