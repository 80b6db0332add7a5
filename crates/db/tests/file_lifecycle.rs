//! Repository-level tests for the temporary-file lifecycle and the
//! visibility-filtered derived queries.

use cutroom_core::types::DbId;
use cutroom_db::models::file::CreateFile;
use cutroom_db::models::user::CreateUser;
use cutroom_db::repositories::{FileRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, username: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.into(),
            password_hash: "$argon2id$unused".into(),
            display_name: None,
            role: "creator".into(),
        },
    )
    .await
    .unwrap()
    .id
}

fn file_input(source: Option<DbId>, is_public: bool, created_by: Option<DbId>) -> CreateFile {
    CreateFile {
        storage_key: Some("uploads/test.png".into()),
        url: "http://localhost:3000/media/uploads/test.png".into(),
        mime_type: "image/png".into(),
        size_bytes: 128,
        original_name: None,
        width: None,
        height: None,
        is_temp: true,
        source_file_id: source,
        is_public,
        created_by,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn promote_flips_temp_and_keeps_storage_key(pool: PgPool) {
    let file = FileRepo::create(&pool, &file_input(None, false, None))
        .await
        .unwrap();
    assert!(file.is_temp);
    assert!(file.process_id.is_none());

    let promoted = FileRepo::promote(&pool, file.id, "lineart")
        .await
        .unwrap()
        .unwrap();
    assert!(!promoted.is_temp);
    assert_eq!(promoted.process_id.as_deref(), Some("lineart"));
    // Metadata-only: the object stays where it was stored.
    assert_eq!(promoted.storage_key, file.storage_key);
    assert_eq!(promoted.url, file.url);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn promote_missing_row_returns_none(pool: PgPool) {
    assert!(FileRepo::promote(&pool, 999_999, "lineart")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn derived_count_batch_covers_every_requested_id(pool: PgPool) {
    let owner = seed_user(&pool, "alice").await;

    let source = FileRepo::create(&pool, &file_input(None, true, Some(owner)))
        .await
        .unwrap();
    for _ in 0..3 {
        FileRepo::create(&pool, &file_input(Some(source.id), true, Some(owner)))
            .await
            .unwrap();
    }

    // One real source, one id with no derived rows, one id that does not
    // exist at all; each reports a count, never an error.
    let counts = FileRepo::count_derived_batch(&pool, &[source.id, source.id + 1, 999_999], None)
        .await
        .unwrap();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0].source_file_id, source.id);
    assert_eq!(counts[0].count, 3);
    assert_eq!(counts[1].count, 0);
    assert_eq!(counts[2].count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn derived_rows_are_public_or_own(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    let source = FileRepo::create(&pool, &file_input(None, true, Some(alice)))
        .await
        .unwrap();
    // One public derivative, one of Alice's private ones, one of Bob's.
    FileRepo::create(&pool, &file_input(Some(source.id), true, Some(alice)))
        .await
        .unwrap();
    FileRepo::create(&pool, &file_input(Some(source.id), false, Some(alice)))
        .await
        .unwrap();
    FileRepo::create(&pool, &file_input(Some(source.id), false, Some(bob)))
        .await
        .unwrap();

    let anonymous = FileRepo::list_derived(&pool, source.id, None).await.unwrap();
    assert_eq!(anonymous.len(), 1);

    let as_alice = FileRepo::list_derived(&pool, source.id, Some(alice))
        .await
        .unwrap();
    assert_eq!(as_alice.len(), 2);

    let as_bob = FileRepo::list_derived(&pool, source.id, Some(bob))
        .await
        .unwrap();
    assert_eq!(as_bob.len(), 2);

    let counts = FileRepo::count_derived_batch(&pool, &[source.id], Some(bob))
        .await
        .unwrap();
    assert_eq!(counts[0].count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_source_keeps_derived_rows(pool: PgPool) {
    let source = FileRepo::create(&pool, &file_input(None, true, None))
        .await
        .unwrap();
    let derived = FileRepo::create(&pool, &file_input(Some(source.id), true, None))
        .await
        .unwrap();

    assert!(FileRepo::delete(&pool, source.id).await.unwrap());

    // The derivation edge is nulled, not cascaded.
    let survivor = FileRepo::find_by_id(&pool, derived.id).await.unwrap().unwrap();
    assert!(survivor.source_file_id.is_none());
}
