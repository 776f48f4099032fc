//! In-memory repositories and fixtures for exercising services and routes
//! without a PostgreSQL instance.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::macros::date;

use crate::common::error::{AppError, AppResult};
use crate::common::pagination::Pagination;
use crate::modules::genre::model::Genre;
use crate::modules::genre::repository::GenreRepository;
use crate::modules::movie::model::{Movie, MovieFilter, NewMovie};
use crate::modules::movie::repository::MovieRepository;
use crate::state::AppState;

#[derive(Default)]
pub struct MemoryGenreRepository {
    rows: Mutex<Vec<Genre>>,
    next_id: AtomicUsize,
}

impl MemoryGenreRepository {
    pub fn names(&self) -> Vec<String> {
        self.rows.lock().unwrap().iter().map(|g| g.name.clone()).collect()
    }
}

#[async_trait]
impl GenreRepository for MemoryGenreRepository {
    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        Ok(self.rows.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn create(&self, name: &str) -> AppResult<Genre> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|g| g.name == name) {
            return Err(AppError::GenreConflict(name.to_string()));
        }
        let genre = Genre {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1,
            name: name.to_string(),
        };
        rows.push(genre.clone());
        Ok(genre)
    }

    async fn save(&self, genre: &Genre) -> AppResult<Genre> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|g| g.id != genre.id && g.name == genre.name) {
            return Err(AppError::GenreConflict(genre.name.clone()));
        }
        let row = rows
            .iter_mut()
            .find(|g| g.id == genre.id)
            .ok_or(AppError::GenreNotFound(genre.id))?;
        *row = genre.clone();
        Ok(genre.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|g| g.id != id);
        Ok(rows.len() != before)
    }
}

/// Records which movie ids were written back through `save`.
#[derive(Default)]
pub struct MemoryMovieRepository {
    rows: Mutex<Vec<Movie>>,
    next_id: AtomicUsize,
    saved: Mutex<Vec<i32>>,
}

impl MemoryMovieRepository {
    pub fn saved_ids(&self) -> Vec<i32> {
        self.saved.lock().unwrap().clone()
    }

    pub fn get(&self, id: i32) -> Option<Movie> {
        self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn insert(&self, rows: &mut Vec<Movie>, movie: NewMovie) -> Movie {
        let movie = Movie {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1,
            title: movie.title,
            description: movie.description,
            release_date: movie.release_date,
            genres: movie.genres,
        };
        rows.push(movie.clone());
        movie
    }
}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn search(&self, filter: &MovieFilter, page: Pagination) -> AppResult<Vec<Movie>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|m| filter.matches(m))
            .skip(page.skip() as usize)
            .take(page.take() as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        Ok(self.get(id))
    }

    async fn create(&self, movie: NewMovie) -> AppResult<Movie> {
        let mut rows = self.rows.lock().unwrap();
        Ok(self.insert(&mut rows, movie))
    }

    async fn create_many(&self, movies: Vec<NewMovie>) -> AppResult<Vec<Movie>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(movies.into_iter().map(|m| self.insert(&mut rows, m)).collect())
    }

    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|m| m.id == movie.id)
            .ok_or(AppError::MovieNotFound(movie.id))?;
        *row = movie.clone();
        self.saved.lock().unwrap().push(movie.id);
        Ok(movie.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        Ok(rows.len() != before)
    }
}

pub struct TestContext {
    pub state: AppState,
    pub genres: Arc<MemoryGenreRepository>,
    pub movies: Arc<MemoryMovieRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let genres = Arc::new(MemoryGenreRepository::default());
        let movies = Arc::new(MemoryMovieRepository::default());
        let state = AppState::new(genres.clone(), movies.clone());
        Self {
            state,
            genres,
            movies,
        }
    }

    pub async fn add_genre(&self, name: &str) -> Genre {
        self.genres.create(name).await.unwrap()
    }

    pub async fn add_movie(&self, title: &str, genres: &[&str]) -> Movie {
        self.movies
            .create(new_movie(title, genres))
            .await
            .unwrap()
    }
}

pub fn new_movie(title: &str, genres: &[&str]) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        description: format!("About {}", title),
        release_date: date!(2010 - 07 - 16),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}
