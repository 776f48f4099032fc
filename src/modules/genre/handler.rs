use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use super::service::GenreService;
use crate::common::extract::{AppJson, AppPath};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// List all genres
#[utoipa::path(
    get,
    path = "/Genres/ListGenres",
    responses(
        (status = 200, description = "Genres retrieved successfully", body = ApiResponse<Vec<GenreResponse>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreService::find_all(state).await {
        Ok(genres) => ApiSuccess::ok(genres, "Genres retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get one genre by ID
#[utoipa::path(
    get,
    path = "/Genres/ListOneGenre/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre found successfully", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Invalid genre ID format"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> impl IntoResponse {
    match GenreService::find_by_id(state, id).await {
        Ok(genre) => ApiSuccess::ok(genre, "Genre retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Add a genre
#[utoipa::path(
    post,
    path = "/Genres/AddGenre",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "Genre created successfully", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Invalid data in request body"),
        (status = 409, description = "Genre name already exists")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGenreRequest>,
) -> impl IntoResponse {
    match GenreService::create(state, payload).await {
        Ok(genre) => ApiSuccess::created(genre, "Genre created successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a genre
///
/// Renaming does not rewrite the genre lists of existing movies.
#[utoipa::path(
    patch,
    path = "/Genres/UpdateGenre/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = UpdateGenreRequest,
    responses(
        (status = 200, description = "Genre updated successfully", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Invalid data or genre ID"),
        (status = 404, description = "Genre not found"),
        (status = 409, description = "Genre name already exists")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateGenreRequest>,
) -> impl IntoResponse {
    match GenreService::update(state, id, payload).await {
        Ok(genre) => ApiSuccess::ok(genre, "Genre updated successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a genre
///
/// The genre is also removed from every movie that lists it.
#[utoipa::path(
    delete,
    path = "/Genres/DeleteGenre/{id}",
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted successfully", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Invalid genre ID format"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> impl IntoResponse {
    match GenreService::delete(state, id).await {
        Ok(genre) => ApiSuccess::ok(genre, "Genre deleted successfully").into_response(),
        Err(e) => e.into_response(),
    }
}
