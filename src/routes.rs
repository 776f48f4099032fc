use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use crate::state::AppState;

pub fn configure_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes())
        .nest("/Movies", crate::modules::movie::router())
        .nest("/Genres", crate::modules::genre::router())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(|| async { "ok" }))
}
