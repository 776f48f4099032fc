use super::dto::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};
use super::model::{MovieFilter, NewMovie};
use crate::common::error::{ensure_valid_id, AppError, AppResult};
use crate::common::pagination::Pagination;
use crate::state::AppState;
use tracing::info;
use validator::Validate;

pub struct MovieService;

impl MovieService {
    pub async fn list_movies(
        state: AppState,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> AppResult<Vec<MovieResponse>> {
        let page = Pagination::new(page, limit)?;
        let movies = state.movies.search(&MovieFilter::default(), page).await?;

        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn get_movie(state: AppState, id: i32) -> AppResult<MovieResponse> {
        let id = ensure_valid_id(id)?;
        let movie = state
            .movies
            .find_by_id(id)
            .await?
            .ok_or(AppError::MovieNotFound(id))?;

        Ok(movie.into())
    }

    pub async fn search_movies(
        state: AppState,
        title: Option<String>,
        genre: Option<String>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> AppResult<Vec<MovieResponse>> {
        let page = Pagination::new(page, limit)?;
        let filter = MovieFilter::new(title, genre);
        let movies = state.movies.search(&filter, page).await?;

        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn create_movie(state: AppState, req: CreateMovieRequest) -> AppResult<MovieResponse> {
        req.validate()?;
        let movie = state.movies.create(NewMovie::from(req)).await?;

        info!(id = movie.id, title = %movie.title, "Created movie");
        Ok(movie.into())
    }

    /// Validates the whole batch up front; nothing is written if any entry is invalid.
    pub async fn create_movies(
        state: AppState,
        reqs: Vec<CreateMovieRequest>,
    ) -> AppResult<Vec<MovieResponse>> {
        if reqs.is_empty() {
            return Err(AppError::Validation("At least one movie is required".to_string()));
        }
        for req in &reqs {
            req.validate()?;
        }

        let movies = state
            .movies
            .create_many(reqs.into_iter().map(NewMovie::from).collect())
            .await?;

        info!(count = movies.len(), "Created movies");
        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn update_movie(
        state: AppState,
        id: i32,
        req: UpdateMovieRequest,
    ) -> AppResult<MovieResponse> {
        let id = ensure_valid_id(id)?;
        req.validate()?;

        let mut movie = state
            .movies
            .find_by_id(id)
            .await?
            .ok_or(AppError::MovieNotFound(id))?;

        req.apply_to(&mut movie);
        let movie = state.movies.save(&movie).await?;

        Ok(movie.into())
    }

    pub async fn delete_movie(state: AppState, id: i32) -> AppResult<MovieResponse> {
        let id = ensure_valid_id(id)?;
        let movie = state
            .movies
            .find_by_id(id)
            .await?
            .ok_or(AppError::MovieNotFound(id))?;

        if !state.movies.delete(id).await? {
            return Err(AppError::MovieNotFound(id));
        }

        Ok(movie.into())
    }
}
