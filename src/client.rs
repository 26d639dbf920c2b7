use crate::calendar::{self, WINDOW_DAYS};
use crate::models::Contribution;
use tracing::warn;

/// Loads the real dataset from the stats proxy for page rendering.
///
/// Every failure mode (unconfigured URL, network error, non-success status,
/// malformed body, empty payload) collapses to `None`: the caller keeps the
/// placeholder dataset and the visitor never sees an error state. The result
/// is clipped again to the canonical window in case the proxy is stale or
/// misconfigured.
pub async fn fetch_history(http: &reqwest::Client, stats_url: &str) -> Option<Vec<Contribution>> {
    if stats_url.is_empty() {
        return None;
    }

    let response = match http.get(stats_url).send().await {
        Ok(response) => response,
        Err(err) => {
            warn!("could not reach stats proxy: {err}");
            return None;
        }
    };

    if !response.status().is_success() {
        warn!(status = %response.status(), "stats proxy returned an error");
        return None;
    }

    let history: Vec<Contribution> = match response.json().await {
        Ok(history) => history,
        Err(err) => {
            warn!("could not parse stats payload: {err}");
            return None;
        }
    };

    if history.is_empty() {
        warn!("stats proxy returned an empty dataset");
        return None;
    }

    Some(calendar::tail_slice(history, WINDOW_DAYS))
}
