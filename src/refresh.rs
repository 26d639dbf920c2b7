use crate::cache::CACHE_KEY;
use crate::state::AppState;
use std::time::Duration;
use tracing::{error, info};

/// Starts the background refresh loop. The first run happens one full
/// interval after startup; the request path covers the window before that.
pub fn spawn(state: AppState, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            refresh_once(&state).await;
        }
    });
}

/// One scheduled refresh: fetch and overwrite the cache entry, no TTL. This
/// path is the primary freshness mechanism, so a good snapshot replaces the
/// old one unconditionally; a failed fetch is logged and changes nothing.
pub async fn refresh_once(state: &AppState) {
    let Some(cache) = &state.cache else {
        info!("scheduled refresh skipped: no cache store configured");
        return;
    };

    match state.source.fetch_recent().await {
        Ok(history) => match serde_json::to_string(&history) {
            Ok(payload) => {
                cache.put(CACHE_KEY, payload, None).await;
                info!(days = history.len(), "scheduled refresh updated the cache");
            }
            Err(err) => error!("could not encode refreshed stats: {err}"),
        },
        Err(err) => error!("scheduled refresh failed: {err}"),
    }
}
