//! Route tree assembly, one module per top-level resource.

pub mod announcement;
pub mod auth;
pub mod character;
pub mod dev;
pub mod episode;
pub mod file;
pub mod generate;
pub mod health;
pub mod movie;
pub mod shorts;
pub mod storyboard;
pub mod webtoon;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                         register (public)
/// /auth/login                            login (public)
/// /auth/refresh                          refresh with rotation (public)
/// /auth/logout                           logout (requires auth)
///
/// /webtoons                              list, create
/// /webtoons/{id}                         get, update, delete
/// /webtoons/{id}/episodes                list, create
///
/// /episodes/{id}                         get, update, delete
/// /episodes/{id}/scripts                 list, create (insert-at)
/// /episodes/{id}/scripts/reorder         apply full permutation (PUT)
/// /episodes/{id}/scripts/{script_id}     update, delete
/// /episodes/{id}/cuts                    list, create (insert-at)
/// /episodes/{id}/cuts/{cut_id}           update, delete
/// /episodes/{id}/storyboards             list, create
///
/// /storyboards/{id}                      get, update, delete
/// /storyboards/{id}/cuts                 list, create (insert-at)
/// /storyboards/{id}/cuts/upload          multipart panel upload (POST)
/// /storyboards/{id}/cuts/{cut_id}        update, delete
///
/// /character-folders                     list, create
/// /character-folders/{id}                get, update, delete
/// /characters                            list (?folder_id=…), create
/// /characters/{id}                       get, update, delete
/// /characters/{id}/sheets                list, create
/// /characters/{id}/sheets/{sheet_id}     update, delete
///
/// /movies                                list, create
/// /movies/{id}                           get, update, delete
/// /movies/{id}/characters[/{cid}]        list, create, update, delete
/// /movies/{id}/backgrounds[/{bid}]       list, create, update, delete
/// /movies/{id}/scenes[/{sid}]            list, create, update, delete
/// /movie-scenes/{id}/cuts[/{cut_id}]     list, create, update, delete
///
/// /shorts                                list, create
/// /shorts/{id}                           get, update, delete
/// /shorts/{id}/characters[/{cid}]        list, create, update, delete
/// /shorts/{id}/scenes[/{sid}]            list, create, update, delete
///
/// /files/upload                          multipart image upload (POST)
/// /files/derived-counts                  batched derived counts (GET)
/// /files/{id}                            get, delete
/// /files/{id}/promote                    promote out of temp (POST)
/// /files/{id}/derived                    derived files, visibility filtered
///
/// /generate/image                        proxy image generation (auth)
/// /generate/video                        proxy video generation (auth)
///
/// /announcements                         list, create (create admin only)
/// /announcements/{id}                    get, update, delete (admin only)
///
/// /dev/session                           dev-only session injection
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/webtoons", webtoon::router())
        .nest("/episodes", episode::router())
        .nest("/storyboards", storyboard::router())
        .nest("/character-folders", character::folders_router())
        .nest("/characters", character::router())
        .nest("/movies", movie::router())
        .nest("/movie-scenes", movie::scenes_router())
        .nest("/shorts", shorts::router())
        .nest("/files", file::router())
        .nest("/generate", generate::router())
        .nest("/announcements", announcement::router())
        .nest("/dev", dev::router())
}
