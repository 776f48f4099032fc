use async_trait::async_trait;
use sqlx::PgPool;

use super::model::{Movie, MovieFilter, NewMovie};
use crate::common::error::{AppError, AppResult};
use crate::common::pagination::Pagination;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Every movie, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Movie>>;

    /// Movies matching `filter`, ordered by id, windowed by `page`.
    async fn search(&self, filter: &MovieFilter, page: Pagination) -> AppResult<Vec<Movie>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>>;

    async fn create(&self, movie: NewMovie) -> AppResult<Movie>;

    /// Inserts the whole batch atomically.
    async fn create_many(&self, movies: Vec<NewMovie>) -> AppResult<Vec<Movie>>;

    /// Persists the full row; the caller has already merged any changes.
    async fn save(&self, movie: &Movie) -> AppResult<Movie>;

    /// Returns `false` when no row matched `id`.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const INSERT_MOVIE: &str = r#"
    INSERT INTO movies (title, description, release_date, genres)
    VALUES ($1, $2, $3, $4)
    RETURNING id, title, description, release_date, genres
"#;

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, description, release_date, genres FROM movies ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    async fn search(&self, filter: &MovieFilter, page: Pagination) -> AppResult<Vec<Movie>> {
        // strpos avoids treating % and _ in the title filter as LIKE wildcards
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, description, release_date, genres
            FROM movies
            WHERE ($1::TEXT IS NULL OR strpos(LOWER(title), LOWER($1)) > 0)
              AND ($2::TEXT IS NULL OR $2 = ANY(genres))
            ORDER BY id ASC
            OFFSET $3
            LIMIT $4
            "#,
        )
        .bind(filter.title.as_deref())
        .bind(filter.genre.as_deref())
        .bind(page.skip())
        .bind(page.take())
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, description, release_date, genres FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn create(&self, movie: NewMovie) -> AppResult<Movie> {
        let movie = sqlx::query_as::<_, Movie>(INSERT_MOVIE)
            .bind(movie.title)
            .bind(movie.description)
            .bind(movie.release_date)
            .bind(movie.genres)
            .fetch_one(&self.pool)
            .await?;

        Ok(movie)
    }

    async fn create_many(&self, movies: Vec<NewMovie>) -> AppResult<Vec<Movie>> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(movies.len());

        for movie in movies {
            let row = sqlx::query_as::<_, Movie>(INSERT_MOVIE)
                .bind(movie.title)
                .bind(movie.description)
                .bind(movie.release_date)
                .bind(movie.genres)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row);
        }

        tx.commit().await?;
        Ok(created)
    }

    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET
                title = $1,
                description = $2,
                release_date = $3,
                genres = $4
            WHERE id = $5
            RETURNING id, title, description, release_date, genres
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(movie.release_date)
        .bind(&movie.genres)
        .bind(movie.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::MovieNotFound(movie.id))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
