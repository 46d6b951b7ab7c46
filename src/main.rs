use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use flickpick::api::{create_router, AppState};
use flickpick::config::Config;
use flickpick::services::{Catalog, OmdbProvider, SimilarityRecommender};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Arc::new(
        Catalog::load(Path::new(&config.catalog_path))
            .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?,
    );
    tracing::info!(movies = catalog.len(), path = %config.catalog_path, "Catalog loaded");

    if config.omdb_api_key.is_none() {
        tracing::warn!(
            "OMDB API key is not set. Movie plots and posters will not be available. \
             Set the OMDB_API_KEY environment variable or add it to config.json."
        );
    }

    let recommender = Arc::new(SimilarityRecommender::new(catalog.clone()));
    let metadata = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
        Duration::from_secs(config.omdb_timeout_secs),
    ));

    let state = AppState::new(catalog, recommender, metadata);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
