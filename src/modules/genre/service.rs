use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use crate::common::error::{ensure_valid_id, AppError, AppResult};
use crate::state::AppState;
use tracing::info;
use validator::Validate;

pub struct GenreService;

impl GenreService {
    pub async fn find_all(state: AppState) -> AppResult<Vec<GenreResponse>> {
        let genres = state.genres.find_all().await?;

        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i32) -> AppResult<GenreResponse> {
        let id = ensure_valid_id(id)?;
        let genre = state
            .genres
            .find_by_id(id)
            .await?
            .ok_or(AppError::GenreNotFound(id))?;

        Ok(genre.into())
    }

    pub async fn create(state: AppState, req: CreateGenreRequest) -> AppResult<GenreResponse> {
        req.validate()?;
        let genre = state.genres.create(&req.name).await?;

        Ok(genre.into())
    }

    pub async fn update(state: AppState, id: i32, req: UpdateGenreRequest) -> AppResult<GenreResponse> {
        let id = ensure_valid_id(id)?;
        req.validate()?;

        let mut genre = state
            .genres
            .find_by_id(id)
            .await?
            .ok_or(AppError::GenreNotFound(id))?;

        if let Some(name) = req.name {
            genre.name = name;
        }

        let genre = state.genres.save(&genre).await?;
        Ok(genre.into())
    }

    /// Deletes the genre after stripping its name from every movie that lists it.
    ///
    /// Movies that never referenced the genre are not written back. The movie
    /// cleanup runs before the genre row is removed, so an interrupted delete
    /// can simply be retried.
    pub async fn delete(state: AppState, id: i32) -> AppResult<GenreResponse> {
        let id = ensure_valid_id(id)?;
        let genre = state
            .genres
            .find_by_id(id)
            .await?
            .ok_or(AppError::GenreNotFound(id))?;

        let mut cleaned = 0usize;
        for mut movie in state.movies.find_all().await? {
            if movie.remove_genre(&genre.name) {
                state.movies.save(&movie).await?;
                cleaned += 1;
            }
        }

        if !state.genres.delete(id).await? {
            return Err(AppError::GenreNotFound(id));
        }

        info!(genre = %genre.name, movies = cleaned, "Deleted genre");
        Ok(genre.into())
    }
}
