//! Integration tests for plain CRUD resources, admin gating, and the
//! development-only session endpoint.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Webtoons and episodes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn webtoon_crud_roundtrip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/webtoons",
        serde_json::json!({ "title": "Moonrise Alley", "description": "nightly chases" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let webtoon = common::body_json(response).await;
    let id = webtoon["id"].as_i64().unwrap();
    assert_eq!(webtoon["title"], "Moonrise Alley");

    let app = common::build_test_app(pool.clone());
    let response = common::put_json(
        app,
        &format!("/api/v1/webtoons/{id}"),
        serde_json::json!({ "title": "Moonrise Alley, Revised" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = common::body_json(response).await;
    assert_eq!(updated["title"], "Moonrise Alley, Revised");
    // Untouched fields survive a partial update.
    assert_eq!(updated["description"], "nightly chases");

    let app = common::build_test_app(pool.clone());
    let response = common::delete(app, &format!("/api/v1/webtoons/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/v1/webtoons/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn webtoon_create_requires_a_title(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/webtoons",
        serde_json::json!({ "title": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_episode_number_conflicts(pool: PgPool) {
    let (webtoon_id, _episode_id) = common::create_webtoon_and_episode(&pool).await;

    // Episode 1 already exists for this webtoon.
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        &format!("/api/v1/webtoons/{webtoon_id}/episodes"),
        serde_json::json!({ "episode_no": 1, "title": "Duplicate" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn episodes_of_missing_webtoon_are_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/webtoons/999999/episodes").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn character_folder_filtering(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/character-folders",
        serde_json::json!({ "name": "protagonists" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let folder_id = common::body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/characters",
        serde_json::json!({ "name": "Hana", "folder_id": folder_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/characters",
        serde_json::json!({ "name": "Stray Cat" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Unfiltered listing has both; the folder filter narrows to one.
    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/v1/characters").await;
    assert_eq!(common::body_json(response).await.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response = common::get(app, &format!("/api/v1/characters?folder_id={folder_id}")).await;
    let filtered = common::body_json(response).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["name"], "Hana");

    // Pointing at a missing folder on create is a 404.
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/characters",
        serde_json::json!({ "name": "Ghost", "folder_id": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn character_sheets_nest_under_their_character(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        "/api/v1/characters",
        serde_json::json!({ "name": "Hana" }),
    )
    .await;
    let character_id = common::body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/characters/{character_id}/sheets"),
        serde_json::json!({ "label": "turnaround", "notes": "three-quarter view" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/v1/characters/{character_id}/sheets")).await;
    let sheets = common::body_json(response).await;
    assert_eq!(sheets.as_array().unwrap().len(), 1);
    assert_eq!(sheets[0]["label"], "turnaround");
}

// ---------------------------------------------------------------------------
// Announcements (admin gated)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn announcements_mutations_are_admin_only(pool: PgPool) {
    let (_admin, admin_password) = common::create_user(&pool, "boss", "admin").await;
    let app = common::build_test_app(pool.clone());
    let admin_token = common::login_for_token(app, "boss", &admin_password).await;

    let (_creator, creator_password) = common::create_user(&pool, "mina", "creator").await;
    let app = common::build_test_app(pool.clone());
    let creator_token = common::login_for_token(app, "mina", &creator_password).await;

    let body = serde_json::json!({ "title": "Deadline moved", "body": "Friday noon." });

    // Anonymous: 401. Creator: 403. Admin: 201.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(app, "/api/v1/announcements", body.clone()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool.clone());
    let response =
        common::post_json_auth(app, "/api/v1/announcements", body.clone(), &creator_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = common::post_json_auth(app, "/api/v1/announcements", body, &admin_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Reads are public.
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/announcements").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = common::body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["title"], "Deadline moved");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pinned_announcements_list_first(pool: PgPool) {
    let (_admin, admin_password) = common::create_user(&pool, "boss", "admin").await;
    let app = common::build_test_app(pool.clone());
    let admin_token = common::login_for_token(app, "boss", &admin_password).await;

    let app = common::build_test_app(pool.clone());
    common::post_json_auth(
        app,
        "/api/v1/announcements",
        serde_json::json!({ "title": "Ordinary", "body": "..." }),
        &admin_token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    common::post_json_auth(
        app,
        "/api/v1/announcements",
        serde_json::json!({ "title": "Pinned", "body": "...", "is_pinned": true }),
        &admin_token,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/announcements").await;
    let list = common::body_json(response).await;
    assert_eq!(list[0]["title"], "Pinned");
    assert_eq!(list[1]["title"], "Ordinary");
}

// ---------------------------------------------------------------------------
// Dev session endpoint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dev_session_serves_html_in_development(pool: PgPool) {
    let (user, _password) = common::create_user(&pool, "mina", "creator").await;

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/v1/dev/session?user_id={}", user.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(common::body_bytes(response).await).unwrap();
    assert!(html.contains("mina"));
    assert!(html.contains("access_token"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dev_session_is_hidden_outside_development(pool: PgPool) {
    let (user, _password) = common::create_user(&pool, "mina", "creator").await;

    let app = common::build_test_app_for_env(pool, "production");
    let response = common::get(app, &format!("/api/v1/dev/session?user_id={}", user.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
