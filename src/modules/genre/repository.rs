use async_trait::async_trait;
use sqlx::PgPool;

use super::model::Genre;
use crate::common::error::{AppError, AppResult};

#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Genre>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>>;

    async fn create(&self, name: &str) -> AppResult<Genre>;

    /// Persists the full row; the caller has already merged any changes.
    async fn save(&self, genre: &Genre) -> AppResult<Genre>;

    /// Returns `false` when no row matched `id`.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_unique_violation(e: sqlx::Error, name: &str) -> AppError {
    if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
        return AppError::GenreConflict(name.to_string());
    }
    AppError::Database(e)
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(genres)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(genre)
    }

    async fn create(&self, name: &str) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, name))
    }

    async fn save(&self, genre: &Genre) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(&genre.name)
        .bind(genre.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &genre.name))?
        .ok_or(AppError::GenreNotFound(genre.id))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
