//! Repositories for movie projects and their sub-resources.
//!
//! Covers `movie_projects`, `movie_characters`, `movie_backgrounds`,
//! `movie_scenes`, and `movie_cuts`.

use cutroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{
    CreateMovieAsset, CreateMovieCut, CreateMovieProject, CreateMovieScene, MovieBackground,
    MovieCharacter, MovieCut, MovieProject, MovieScene, UpdateMovieAsset, UpdateMovieCut,
    UpdateMovieProject, UpdateMovieScene,
};

const PROJECT_COLUMNS: &str = "id, title, description, created_by, created_at, updated_at";
const ASSET_COLUMNS: &str =
    "id, movie_id, name, description, image_file_id, created_at, updated_at";
const SCENE_COLUMNS: &str = "id, movie_id, scene_no, title, script, created_at, updated_at";
const CUT_COLUMNS: &str =
    "id, scene_id, cut_index, description, image_file_id, created_at, updated_at";

/// Provides CRUD operations for movie projects.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieProject,
        created_by: Option<DbId>,
    ) -> Result<MovieProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_projects (title, description, created_by)
             VALUES ($1, $2, $3)
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, MovieProject>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a movie project by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieProject>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM movie_projects WHERE id = $1");
        sqlx::query_as::<_, MovieProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movie projects, ordered by title ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieProject>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM movie_projects ORDER BY title ASC");
        sqlx::query_as::<_, MovieProject>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a movie project. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieProject,
    ) -> Result<Option<MovieProject>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, MovieProject>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie project (sub-resources cascade). Returns
    /// `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// MovieCharacterRepo / MovieBackgroundRepo
//
// The two asset tables have identical shapes; each repo targets its own
// table so queries stay greppable.
// ---------------------------------------------------------------------------

/// Provides CRUD operations for movie characters.
pub struct MovieCharacterRepo;

impl MovieCharacterRepo {
    /// Insert a new movie character, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieAsset,
    ) -> Result<MovieCharacter, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_characters (movie_id, name, description, image_file_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, MovieCharacter>(&query)
            .bind(input.movie_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie character by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieCharacter>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM movie_characters WHERE id = $1");
        sqlx::query_as::<_, MovieCharacter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters of a movie, ordered by name ascending.
    pub async fn list_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<MovieCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM movie_characters
             WHERE movie_id = $1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, MovieCharacter>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update a movie character. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieAsset,
    ) -> Result<Option<MovieCharacter>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_characters SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_file_id = COALESCE($4, image_file_id)
             WHERE id = $1
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, MovieCharacter>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie character. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for movie backgrounds.
pub struct MovieBackgroundRepo;

impl MovieBackgroundRepo {
    /// Insert a new movie background, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieAsset,
    ) -> Result<MovieBackground, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_backgrounds (movie_id, name, description, image_file_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, MovieBackground>(&query)
            .bind(input.movie_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie background by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieBackground>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM movie_backgrounds WHERE id = $1");
        sqlx::query_as::<_, MovieBackground>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all backgrounds of a movie, ordered by name ascending.
    pub async fn list_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<MovieBackground>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM movie_backgrounds
             WHERE movie_id = $1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, MovieBackground>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update a movie background. Only non-`None` fields in `input` are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieAsset,
    ) -> Result<Option<MovieBackground>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_backgrounds SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_file_id = COALESCE($4, image_file_id)
             WHERE id = $1
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, MovieBackground>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie background. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_backgrounds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// MovieSceneRepo / MovieCutRepo
// ---------------------------------------------------------------------------

/// Provides CRUD operations for movie scenes.
pub struct MovieSceneRepo;

impl MovieSceneRepo {
    /// Insert a new movie scene, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieScene,
    ) -> Result<MovieScene, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_scenes (movie_id, scene_no, title, script)
             VALUES ($1, COALESCE($2, 0), $3, COALESCE($4, ''))
             RETURNING {SCENE_COLUMNS}"
        );
        sqlx::query_as::<_, MovieScene>(&query)
            .bind(input.movie_id)
            .bind(input.scene_no)
            .bind(&input.title)
            .bind(&input.script)
            .fetch_one(pool)
            .await
    }

    /// Find a movie scene by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieScene>, sqlx::Error> {
        let query = format!("SELECT {SCENE_COLUMNS} FROM movie_scenes WHERE id = $1");
        sqlx::query_as::<_, MovieScene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scenes of a movie, ordered by scene number ascending.
    pub async fn list_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<MovieScene>, sqlx::Error> {
        let query = format!(
            "SELECT {SCENE_COLUMNS} FROM movie_scenes
             WHERE movie_id = $1
             ORDER BY scene_no ASC"
        );
        sqlx::query_as::<_, MovieScene>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update a movie scene. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieScene,
    ) -> Result<Option<MovieScene>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_scenes SET
                scene_no = COALESCE($2, scene_no),
                title = COALESCE($3, title),
                script = COALESCE($4, script)
             WHERE id = $1
             RETURNING {SCENE_COLUMNS}"
        );
        sqlx::query_as::<_, MovieScene>(&query)
            .bind(id)
            .bind(input.scene_no)
            .bind(&input.title)
            .bind(&input.script)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie scene (cuts cascade). Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_scenes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for movie cuts.
///
/// `cut_index` here is display order only; unlike episode and storyboard
/// cuts it is not uniqueness-constrained and not reindexed.
pub struct MovieCutRepo;

impl MovieCutRepo {
    /// Insert a new movie cut, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovieCut) -> Result<MovieCut, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_cuts (scene_id, cut_index, description, image_file_id)
             VALUES ($1, COALESCE($2, 0), $3, $4)
             RETURNING {CUT_COLUMNS}"
        );
        sqlx::query_as::<_, MovieCut>(&query)
            .bind(input.scene_id)
            .bind(input.cut_index)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie cut by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieCut>, sqlx::Error> {
        let query = format!("SELECT {CUT_COLUMNS} FROM movie_cuts WHERE id = $1");
        sqlx::query_as::<_, MovieCut>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cuts of a scene, ordered by cut index ascending.
    pub async fn list_by_scene(
        pool: &PgPool,
        scene_id: DbId,
    ) -> Result<Vec<MovieCut>, sqlx::Error> {
        let query = format!(
            "SELECT {CUT_COLUMNS} FROM movie_cuts
             WHERE scene_id = $1
             ORDER BY cut_index ASC"
        );
        sqlx::query_as::<_, MovieCut>(&query)
            .bind(scene_id)
            .fetch_all(pool)
            .await
    }

    /// Update a movie cut. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovieCut,
    ) -> Result<Option<MovieCut>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_cuts SET
                cut_index = COALESCE($2, cut_index),
                description = COALESCE($3, description),
                image_file_id = COALESCE($4, image_file_id)
             WHERE id = $1
             RETURNING {CUT_COLUMNS}"
        );
        sqlx::query_as::<_, MovieCut>(&query)
            .bind(id)
            .bind(input.cut_index)
            .bind(&input.description)
            .bind(input.image_file_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie cut. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_cuts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
