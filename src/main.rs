use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod middleware;
mod modules;
mod routes;
mod state;

#[cfg(test)]
mod test_utils;

use crate::config::settings::AppConfig;
use crate::infrastructure::db::pool::{connect_to_db, run_migrations};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new()?;

    let db = connect_to_db(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to connect to PostgreSQL")?;
    run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = AppState::with_pool(db);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/api", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
