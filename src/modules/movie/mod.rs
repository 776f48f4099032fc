use axum::Router;
use axum::routing::{delete, get, patch, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ListMovies", get(handler::list_movies))
        .route("/ListOneMovie/{id}", get(handler::get_movie))
        .route("/SearchMovies", get(handler::search_movies))
        .route("/AddMovie", post(handler::create_movie))
        .route("/AddMultipleMovies", post(handler::create_movies))
        .route("/UpdateMovie/{id}", patch(handler::update_movie))
        .route("/DeleteMovie/{id}", delete(handler::delete_movie))
}
