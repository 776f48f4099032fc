use crate::common::extract::{AppJson, AppPath, AppQuery};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::movie::dto::*;
use crate::modules::movie::service::MovieService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/Movies/ListMovies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Movies retrieved successfully", body = ApiResponse<Vec<MovieResponse>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListMoviesQuery>,
) -> impl IntoResponse {
    match MovieService::list_movies(state, query.page, query.limit).await {
        Ok(res) => ApiSuccess::ok(res, "Movies retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/Movies/ListOneMovie/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found successfully", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Invalid movie ID format"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> impl IntoResponse {
    match MovieService::get_movie(state, id).await {
        Ok(res) => ApiSuccess::ok(res, "Movie retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Search movies by title and/or genre
#[utoipa::path(
    get,
    path = "/Movies/SearchMovies",
    params(SearchMoviesQuery),
    responses(
        (status = 200, description = "Movies retrieved successfully based on filters", body = ApiResponse<Vec<MovieResponse>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "Movies"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchMoviesQuery>,
) -> impl IntoResponse {
    match MovieService::search_movies(state, query.title, query.genre, query.page, query.limit).await {
        Ok(res) => ApiSuccess::ok(res, "Movies retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/Movies/AddMovie",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created successfully", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Invalid data in request body")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateMovieRequest>,
) -> impl IntoResponse {
    match MovieService::create_movie(state, req).await {
        Ok(res) => ApiSuccess::created(res, "Movie created successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Add several movies in one request
///
/// Either every movie is stored or none is.
#[utoipa::path(
    post,
    path = "/Movies/AddMultipleMovies",
    request_body = Vec<CreateMovieRequest>,
    responses(
        (status = 201, description = "Movies created successfully", body = ApiResponse<Vec<MovieResponse>>),
        (status = 400, description = "Invalid data in request body")
    ),
    tag = "Movies"
)]
pub async fn create_movies(
    State(state): State<AppState>,
    AppJson(reqs): AppJson<Vec<CreateMovieRequest>>,
) -> impl IntoResponse {
    match MovieService::create_movies(state, reqs).await {
        Ok(res) => ApiSuccess::created(res, "Movies created successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    patch,
    path = "/Movies/UpdateMovie/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated successfully", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Invalid movie ID or data in request body"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(req): AppJson<UpdateMovieRequest>,
) -> impl IntoResponse {
    match MovieService::update_movie(state, id, req).await {
        Ok(res) => ApiSuccess::ok(res, "Movie updated successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/Movies/DeleteMovie/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted successfully", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Invalid movie ID format"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> impl IntoResponse {
    match MovieService::delete_movie(state, id).await {
        Ok(res) => ApiSuccess::ok(res, "Movie deleted successfully").into_response(),
        Err(e) => e.into_response(),
    }
}
