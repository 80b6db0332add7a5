//! Shared helpers for API integration tests.
//!
//! Tests build the same router (and middleware stack) as production via
//! [`build_app_router`], backed by the `#[sqlx::test]`-provided pool, a
//! local storage provider rooted in a per-process temp directory, and a
//! generation client pointed at an unreachable endpoint.

#![allow(dead_code)] // not every test binary uses every helper

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use cutroom_api::auth::jwt::JwtConfig;
use cutroom_api::auth::password::hash_password;
use cutroom_api::config::ServerConfig;
use cutroom_api::router::build_app_router;
use cutroom_api::state::AppState;
use cutroom_cloud::local::LocalStorage;
use cutroom_core::types::DbId;
use cutroom_db::models::user::{CreateUser, User};
use cutroom_db::repositories::UserRepo;
use cutroom_gen::{GenClient, GenConfig};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Media root shared by every test app in this process.
fn test_media_root() -> &'static PathBuf {
    static ROOT: std::sync::OnceLock<PathBuf> = std::sync::OnceLock::new();
    ROOT.get_or_init(|| {
        let dir = std::env::temp_dir().join(format!("cutroom-test-media-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("failed to create test media root");
        dir
    })
}

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    test_config_for_env("development")
}

/// Like [`test_config`] but with an explicit environment name, for tests
/// of development-gated behaviour.
pub fn test_config_for_env(environment: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: environment.to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_base_url: "http://localhost:3000".to_string(),
        storage_backend: "local".to_string(),
        media_root: test_media_root().to_string_lossy().into_owned(),
        s3_bucket: String::new(),
        s3_public_base_url: String::new(),
        jwt: JwtConfig {
            secret: "integration-test-secret-with-plenty-of-entropy".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_for_env(pool, "development")
}

/// Like [`build_test_app`] but with an explicit environment name.
pub fn build_test_app_for_env(pool: PgPool, environment: &str) -> Router {
    let config = test_config_for_env(environment);

    let storage = Arc::new(LocalStorage::new(
        test_media_root(),
        &config.public_base_url,
    ));

    // Connection-refused endpoint: generation tests never reach a real
    // provider.
    let gen = GenClient::new(GenConfig {
        api_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        timeout_secs: 1,
    })
    .expect("failed to build test generation client");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        gen: Arc::new(gen),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

/// Insert a user directly, returning the row and the plaintext password.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> (User, String) {
    let password = format!("{username}-password");
    let password_hash = hash_password(&password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
            display_name: None,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");
    (user, password)
}

/// Log in through the API and return the access token.
pub async fn login_for_token(app: Router, username: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::get(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    app.oneshot(
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(Request::delete(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::delete(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a multipart POST request. `parts` is a list of
/// `(field_name, file_name, content_type, bytes)`; text fields pass `None`
/// for file name and content type.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    parts: &[(&str, Option<&str>, Option<&str>, Vec<u8>)],
    token: Option<&str>,
) -> Response {
    let boundary = "cutroom-test-boundary";
    let mut body = Vec::new();
    for (name, file_name, content_type, bytes) in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        match file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
            ),
        }
        if let Some(content_type) = content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    let mut request = Request::post(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={boundary}"),
    );
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    app.oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a webtoon + episode through the API, returning their ids.
pub async fn create_webtoon_and_episode(pool: &PgPool) -> (DbId, DbId) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/webtoons",
        serde_json::json!({ "title": "Test Webtoon" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let webtoon_id = body_json(response).await["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/webtoons/{webtoon_id}/episodes"),
        serde_json::json!({ "episode_no": 1, "title": "Episode One" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let episode_id = body_json(response).await["id"].as_i64().unwrap();

    (webtoon_id, episode_id)
}

/// A tiny in-memory PNG for upload tests.
pub fn tiny_png(width: u32, height: u32) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    image::RgbaImage::new(width, height)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
