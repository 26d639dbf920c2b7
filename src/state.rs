use crate::cache::CacheStore;
use crate::github::ContributionSource;
use std::sync::Arc;

/// Shared handler state. Every collaborator is injected so tests can swap in
/// an in-memory cache and a scripted upstream.
#[derive(Clone)]
pub struct AppState {
    /// `None` means no cache store is configured: a supported degraded mode
    /// where every request computes live.
    pub cache: Option<Arc<dyn CacheStore>>,
    pub source: Arc<dyn ContributionSource>,
    pub http: reqwest::Client,
    /// Base URL of the stats proxy the page pulls from. Empty disables the
    /// fetch entirely and the page keeps its placeholder dataset.
    pub stats_url: String,
}

impl AppState {
    pub fn new(
        cache: Option<Arc<dyn CacheStore>>,
        source: Arc<dyn ContributionSource>,
        http: reqwest::Client,
        stats_url: String,
    ) -> Self {
        Self {
            cache,
            source,
            http,
            stats_url,
        }
    }
}
