use crate::cache::CACHE_KEY;
use crate::errors::AppError;
use crate::state::AppState;
use crate::{calendar, client, ui};
use axum::extract::State;
use axum::http::{header, HeaderName};
use axum::response::{Html, IntoResponse, Response};
use chrono::Local;
use std::time::Duration;
use tracing::{error, info};

/// Safety-net TTL for request-path cache writes; the scheduled refresh is
/// the primary freshness mechanism and writes without one.
const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const X_SOURCE: HeaderName = HeaderName::from_static("x-source");

/// Portfolio page. Renders the contribution graph from real data when the
/// stats proxy is configured and reachable, otherwise from the placeholder
/// dataset. A failed fetch is never visible to the visitor.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let history = match client::fetch_history(&state.http, &state.stats_url).await {
        Some(history) => history,
        None => calendar::placeholder_history(Local::now().date_naive()),
    };
    Html(ui::render_page(&history))
}

/// Stats proxy endpoint: cached dataset when present, otherwise a live
/// upstream fetch whose result is written back without delaying the
/// response. A failed fetch returns 500 and leaves the cache untouched.
pub async fn get_stats(State(state): State<AppState>) -> Result<Response, AppError> {
    if let Some(cache) = &state.cache {
        if let Some(cached) = cache.get(CACHE_KEY).await {
            return Ok((
                [
                    (header::CONTENT_TYPE, "application/json"),
                    (X_SOURCE, "KV-Cache"),
                ],
                cached,
            )
                .into_response());
        }
    }

    let history = match state.source.fetch_recent().await {
        Ok(history) => history,
        Err(err) => {
            error!("live stats fetch failed: {err}");
            return Err(err.into());
        }
    };
    let payload = serde_json::to_string(&history).map_err(AppError::internal)?;

    if let Some(cache) = state.cache.clone() {
        let value = payload.clone();
        tokio::spawn(async move {
            cache.put(CACHE_KEY, value, Some(CACHE_TTL)).await;
            info!("stats cache updated from request path");
        });
    }

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
            (X_SOURCE, "Live-API"),
        ],
        payload,
    )
        .into_response())
}
