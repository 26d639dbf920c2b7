use portfolio::cache::{CacheStore, MemoryCache};
use portfolio::github::GithubSource;
use portfolio::{refresh, AppState, Config};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let http = reqwest::Client::new();

    let source = Arc::new(GithubSource::new(
        http.clone(),
        config.github_api_url.clone(),
        config.github_token.clone(),
        config.github_username.clone(),
    ));
    let cache: Option<Arc<dyn CacheStore>> = if config.cache_enabled {
        Some(Arc::new(MemoryCache::new()))
    } else {
        None
    };

    let state = AppState::new(cache, source, http, config.stats_url.clone());
    refresh::spawn(state.clone(), Duration::from_secs(config.refresh_secs));

    let app = portfolio::router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
