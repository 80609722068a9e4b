use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::api::import::{AppState, handle_import};
use crate::config::Config;

mod api;
mod config;
mod error;
mod models;
mod services;

// SugarWOD exports of several years of history run to a few megabytes.
const MAX_EXPORT_BYTES: usize = 20 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(|| async { "Barbell progression importer" }))
        .route("/import", post(handle_import))
        .layer(DefaultBodyLimit::max(MAX_EXPORT_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(
        port = %config.port,
        default_target_reps = config.default_target_reps,
        "server.listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
