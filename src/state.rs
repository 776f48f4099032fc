use std::sync::Arc;

use crate::infrastructure::db::pool::DbPool;
use crate::modules::genre::repository::{GenreRepository, PgGenreRepository};
use crate::modules::movie::repository::{MovieRepository, PgMovieRepository};

#[derive(Clone)]
pub struct AppState {
    pub genres: Arc<dyn GenreRepository>,
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(genres: Arc<dyn GenreRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { genres, movies }
    }

    /// Wires both repositories to the same PostgreSQL pool.
    pub fn with_pool(db: DbPool) -> Self {
        Self::new(
            Arc::new(PgGenreRepository::new(db.clone())),
            Arc::new(PgMovieRepository::new(db)),
        )
    }
}
