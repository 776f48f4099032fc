use utoipa::OpenApi;
use crate::modules::genre::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use crate::modules::movie::dto::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Catalog API",
        description = "REST API for Movies and Genres",
        version = "1.0"
    ),
    paths(
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::search_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::create_movies,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
    ),
    components(
        schemas(
            CreateMovieRequest, UpdateMovieRequest, MovieResponse,
            CreateGenreRequest, UpdateGenreRequest, GenreResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalog"),
        (name = "Genres", description = "Genres referenced by movies")
    )
)]
pub struct ApiDoc;
