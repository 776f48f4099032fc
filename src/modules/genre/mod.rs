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
        .route("/ListGenres", get(handler::list_genres))
        .route("/ListOneGenre/{id}", get(handler::get_genre))
        .route("/AddGenre", post(handler::create_genre))
        .route("/UpdateGenre/{id}", patch(handler::update_genre))
        .route("/DeleteGenre/{id}", delete(handler::delete_genre))
}
