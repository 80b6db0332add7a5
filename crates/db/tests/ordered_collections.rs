//! Repository-level tests for the dense ordinal protocol shared by
//! episode scripts, episode cuts, and storyboard panels: insert-at
//! shifting, delete gap-closing, and all-or-nothing reorder.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use cutroom_core::types::DbId;
use cutroom_db::models::cut::CreateCut;
use cutroom_db::models::script::CreateEpisodeScript;
use cutroom_db::models::storyboard::{CreateStoryboard, CreateStoryboardCut};
use cutroom_db::models::webtoon::{CreateEpisode, CreateWebtoon};
use cutroom_db::repositories::{
    CutRepo, EpisodeRepo, EpisodeScriptRepo, StoryboardCutRepo, StoryboardRepo, WebtoonRepo,
};
use sqlx::PgPool;

async fn seed_episode(pool: &PgPool) -> DbId {
    let webtoon = WebtoonRepo::create(
        pool,
        &CreateWebtoon {
            title: "Fixture".into(),
            description: None,
            thumbnail_url: None,
        },
        None,
    )
    .await
    .unwrap();
    EpisodeRepo::create(
        pool,
        &CreateEpisode {
            webtoon_id: webtoon.id,
            episode_no: 1,
            title: "Fixture Episode".into(),
            synopsis: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_script(pool: &PgPool, episode_id: DbId, title: &str, index: Option<i32>) -> DbId {
    EpisodeScriptRepo::create(
        pool,
        &CreateEpisodeScript {
            episode_id,
            order_index: index,
            title: Some(title.into()),
            content: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn script_order(pool: &PgPool, episode_id: DbId) -> Vec<(DbId, i32)> {
    EpisodeScriptRepo::list_by_episode(pool, episode_id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| (s.id, s.order_index))
        .collect()
}

// ---------------------------------------------------------------------------
// Episode scripts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_insert_shifts_descending_without_collisions(pool: PgPool) {
    let episode_id = seed_episode(&pool).await;

    let a = seed_script(&pool, episode_id, "a", None).await;
    let b = seed_script(&pool, episode_id, "b", None).await;
    let c = seed_script(&pool, episode_id, "c", None).await;

    // Insert at 0: with the unique (episode_id, order_index) constraint in
    // place, the whole existing collection must move up one slot.
    let head = seed_script(&pool, episode_id, "head", Some(0)).await;

    assert_eq!(
        script_order(&pool, episode_id).await,
        vec![(head, 0), (a, 1), (b, 2), (c, 3)]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_delete_closes_gap_ascending(pool: PgPool) {
    let episode_id = seed_episode(&pool).await;

    let a = seed_script(&pool, episode_id, "a", None).await;
    let b = seed_script(&pool, episode_id, "b", None).await;
    let c = seed_script(&pool, episode_id, "c", None).await;
    let d = seed_script(&pool, episode_id, "d", None).await;

    assert!(EpisodeScriptRepo::delete(&pool, b).await.unwrap());

    assert_eq!(
        script_order(&pool, episode_id).await,
        vec![(a, 0), (c, 1), (d, 2)]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_delete_of_missing_row_is_false(pool: PgPool) {
    assert!(!EpisodeScriptRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_reorder_matches_position_for_every_permutation(pool: PgPool) {
    let episode_id = seed_episode(&pool).await;

    let a = seed_script(&pool, episode_id, "a", None).await;
    let b = seed_script(&pool, episode_id, "b", None).await;
    let c = seed_script(&pool, episode_id, "c", None).await;

    // Every permutation of three ids, including the identity and full
    // reversal, lands each id at its position in the supplied sequence.
    let permutations: [[DbId; 3]; 6] = [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ];

    for permutation in permutations {
        EpisodeScriptRepo::reorder(&pool, episode_id, &permutation)
            .await
            .unwrap();

        let stored = script_order(&pool, episode_id).await;
        for (position, &id) in permutation.iter().enumerate() {
            assert_eq!(stored[position], (id, position as i32));
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_reorder_ignores_rows_of_other_episodes(pool: PgPool) {
    let episode_a = seed_episode(&pool).await;
    let webtoon = WebtoonRepo::create(
        &pool,
        &CreateWebtoon {
            title: "Other".into(),
            description: None,
            thumbnail_url: None,
        },
        None,
    )
    .await
    .unwrap();
    let episode_b = EpisodeRepo::create(
        &pool,
        &CreateEpisode {
            webtoon_id: webtoon.id,
            episode_no: 1,
            title: "Other Episode".into(),
            synopsis: None,
        },
    )
    .await
    .unwrap()
    .id;

    let a1 = seed_script(&pool, episode_a, "a1", None).await;
    let a2 = seed_script(&pool, episode_a, "a2", None).await;
    let b1 = seed_script(&pool, episode_b, "b1", None).await;

    EpisodeScriptRepo::reorder(&pool, episode_a, &[a2, a1])
        .await
        .unwrap();

    // Episode B's collection is untouched.
    assert_eq!(script_order(&pool, episode_b).await, vec![(b1, 0)]);
}

// ---------------------------------------------------------------------------
// Episode cuts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cut_insert_and_delete_keep_indices_dense(pool: PgPool) {
    let episode_id = seed_episode(&pool).await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let cut = CutRepo::create(
            &pool,
            &CreateCut {
                episode_id,
                cut_index: None,
                description: Some(format!("cut {i}")),
                image_file_id: None,
            },
        )
        .await
        .unwrap();
        ids.push(cut.id);
    }

    let wedge = CutRepo::create(
        &pool,
        &CreateCut {
            episode_id,
            cut_index: Some(2),
            description: Some("wedge".into()),
            image_file_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(wedge.cut_index, 2);

    assert!(CutRepo::delete(&pool, ids[0]).await.unwrap());

    let cuts = CutRepo::list_by_episode(&pool, episode_id).await.unwrap();
    let order: Vec<(DbId, i32)> = cuts.into_iter().map(|c| (c.id, c.cut_index)).collect();
    assert_eq!(
        order,
        vec![(ids[1], 0), (wedge.id, 1), (ids[2], 2), (ids[3], 3)]
    );
}

// ---------------------------------------------------------------------------
// Storyboard panels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn storyboard_panels_shift_from_k_to_the_end(pool: PgPool) {
    let episode_id = seed_episode(&pool).await;
    let storyboard = StoryboardRepo::create(
        &pool,
        &CreateStoryboard {
            episode_id,
            name: "rough".into(),
            notes: None,
        },
    )
    .await
    .unwrap();

    let mut ids = Vec::new();
    for i in 0..3 {
        let panel = StoryboardCutRepo::create(
            &pool,
            &CreateStoryboardCut {
                storyboard_id: storyboard.id,
                cut_index: None,
                image_data: BASE64.encode(format!("panel {i}")),
                mime_type: None,
                caption: None,
            },
        )
        .await
        .unwrap();
        ids.push(panel.id);
    }

    // Insert at k = 1: ids previously at {1, 2} now occupy {2, 3}.
    let wedge = StoryboardCutRepo::create(
        &pool,
        &CreateStoryboardCut {
            storyboard_id: storyboard.id,
            cut_index: Some(1),
            image_data: BASE64.encode("wedge"),
            mime_type: None,
            caption: None,
        },
    )
    .await
    .unwrap();

    let panels = StoryboardCutRepo::list_by_storyboard(&pool, storyboard.id)
        .await
        .unwrap();
    let order: Vec<(DbId, i32)> = panels.into_iter().map(|p| (p.id, p.cut_index)).collect();
    assert_eq!(
        order,
        vec![(ids[0], 0), (wedge.id, 1), (ids[1], 2), (ids[2], 3)]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn storyboard_panel_defaults_to_png_mime(pool: PgPool) {
    let episode_id = seed_episode(&pool).await;
    let storyboard = StoryboardRepo::create(
        &pool,
        &CreateStoryboard {
            episode_id,
            name: "rough".into(),
            notes: None,
        },
    )
    .await
    .unwrap();

    let panel = StoryboardCutRepo::create(
        &pool,
        &CreateStoryboardCut {
            storyboard_id: storyboard.id,
            cut_index: None,
            image_data: BASE64.encode("bytes"),
            mime_type: None,
            caption: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(panel.mime_type, "image/png");
}
