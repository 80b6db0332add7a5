//! Integration tests for the ordered episode-script collection: insert-at
//! shifting, full-permutation reorder, and gap closing on delete.

mod common;

use axum::http::StatusCode;
use cutroom_core::types::DbId;
use sqlx::PgPool;

/// Create a script through the API and return its id.
async fn create_script(pool: &PgPool, episode_id: DbId, title: &str) -> DbId {
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts"),
        serde_json::json!({ "title": title, "content": format!("{title} content") }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    common::body_json(response).await["id"].as_i64().unwrap()
}

/// Fetch `(id, order_index, title)` triples in display order.
async fn list_scripts(pool: &PgPool, episode_id: DbId) -> Vec<(DbId, i64, String)> {
    let app = common::build_test_app(pool.clone());
    let response = common::get(app, &format!("/api/v1/episodes/{episode_id}/scripts")).await;
    assert_eq!(response.status(), StatusCode::OK);
    common::body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["id"].as_i64().unwrap(),
                s["order_index"].as_i64().unwrap(),
                s["title"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_appends_with_dense_indices(pool: PgPool) {
    let (_webtoon_id, episode_id) = common::create_webtoon_and_episode(&pool).await;

    create_script(&pool, episode_id, "alpha").await;
    create_script(&pool, episode_id, "bravo").await;
    create_script(&pool, episode_id, "charlie").await;

    let scripts = list_scripts(&pool, episode_id).await;
    let titles: Vec<&str> = scripts.iter().map(|(_, _, t)| t.as_str()).collect();
    let indices: Vec<i64> = scripts.iter().map(|(_, i, _)| *i).collect();
    assert_eq!(titles, ["alpha", "bravo", "charlie"]);
    assert_eq!(indices, [0, 1, 2]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_at_position_shifts_later_siblings(pool: PgPool) {
    let (_webtoon_id, episode_id) = common::create_webtoon_and_episode(&pool).await;

    create_script(&pool, episode_id, "alpha").await;
    create_script(&pool, episode_id, "bravo").await;
    create_script(&pool, episode_id, "charlie").await;

    // Insert at position 1; bravo and charlie move up one slot.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts"),
        serde_json::json!({ "title": "inserted", "order_index": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(common::body_json(response).await["order_index"], 1);

    let scripts = list_scripts(&pool, episode_id).await;
    let titles: Vec<&str> = scripts.iter().map(|(_, _, t)| t.as_str()).collect();
    let indices: Vec<i64> = scripts.iter().map(|(_, i, _)| *i).collect();
    assert_eq!(titles, ["alpha", "inserted", "bravo", "charlie"]);
    assert_eq!(indices, [0, 1, 2, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_position_is_clamped(pool: PgPool) {
    let (_webtoon_id, episode_id) = common::create_webtoon_and_episode(&pool).await;

    create_script(&pool, episode_id, "alpha").await;

    // Far beyond the end: appends.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts"),
        serde_json::json!({ "title": "tail", "order_index": 99 }),
    )
    .await;
    assert_eq!(common::body_json(response).await["order_index"], 1);

    // Negative: front.
    let app = common::build_test_app(pool.clone());
    let response = common::post_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts"),
        serde_json::json!({ "title": "head", "order_index": -5 }),
    )
    .await;
    assert_eq!(common::body_json(response).await["order_index"], 0);

    let scripts = list_scripts(&pool, episode_id).await;
    let titles: Vec<&str> = scripts.iter().map(|(_, _, t)| t.as_str()).collect();
    assert_eq!(titles, ["head", "alpha", "tail"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_applies_any_permutation(pool: PgPool) {
    let (_webtoon_id, episode_id) = common::create_webtoon_and_episode(&pool).await;

    let a = create_script(&pool, episode_id, "alpha").await;
    let b = create_script(&pool, episode_id, "bravo").await;
    let c = create_script(&pool, episode_id, "charlie").await;
    let d = create_script(&pool, episode_id, "delta").await;

    let permutation = [c, a, d, b];
    let app = common::build_test_app(pool.clone());
    let response = common::put_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts/reorder"),
        serde_json::json!({ "script_ids": permutation }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Every id's stored index equals its position in the permutation.
    let scripts = list_scripts(&pool, episode_id).await;
    for (position, &id) in permutation.iter().enumerate() {
        assert_eq!(scripts[position].0, id);
        assert_eq!(scripts[position].1, position as i64);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_rejects_partial_or_foreign_id_sets(pool: PgPool) {
    let (_webtoon_id, episode_id) = common::create_webtoon_and_episode(&pool).await;

    let a = create_script(&pool, episode_id, "alpha").await;
    let b = create_script(&pool, episode_id, "bravo").await;

    // Too few ids.
    let app = common::build_test_app(pool.clone());
    let response = common::put_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts/reorder"),
        serde_json::json!({ "script_ids": [a] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Duplicate ids.
    let app = common::build_test_app(pool.clone());
    let response = common::put_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts/reorder"),
        serde_json::json!({ "script_ids": [a, a] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown id.
    let app = common::build_test_app(pool.clone());
    let response = common::put_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts/reorder"),
        serde_json::json!({ "script_ids": [a, 999_999] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing moved.
    let scripts = list_scripts(&pool, episode_id).await;
    assert_eq!(scripts[0].0, a);
    assert_eq!(scripts[1].0, b);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_closes_the_gap(pool: PgPool) {
    let (_webtoon_id, episode_id) = common::create_webtoon_and_episode(&pool).await;

    let _a = create_script(&pool, episode_id, "alpha").await;
    let b = create_script(&pool, episode_id, "bravo").await;
    let _c = create_script(&pool, episode_id, "charlie").await;

    let app = common::build_test_app(pool.clone());
    let response = common::delete(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts/{b}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let scripts = list_scripts(&pool, episode_id).await;
    let titles: Vec<&str> = scripts.iter().map(|(_, _, t)| t.as_str()).collect();
    let indices: Vec<i64> = scripts.iter().map(|(_, i, _)| *i).collect();
    assert_eq!(titles, ["alpha", "charlie"]);
    assert_eq!(indices, [0, 1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_content_but_not_position(pool: PgPool) {
    let (_webtoon_id, episode_id) = common::create_webtoon_and_episode(&pool).await;

    let _a = create_script(&pool, episode_id, "alpha").await;
    let b = create_script(&pool, episode_id, "bravo").await;

    let app = common::build_test_app(pool.clone());
    let response = common::put_json(
        app,
        &format!("/api/v1/episodes/{episode_id}/scripts/{b}"),
        serde_json::json!({ "content": "revised" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["content"], "revised");
    assert_eq!(json["order_index"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn scripts_of_missing_episode_are_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/episodes/999999/scripts").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
