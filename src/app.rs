use crate::handlers;
use crate::state::AppState;
use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// The page and the proxy are typically served from different origins, so
/// the stats route answers preflights permissively. The layer also handles
/// `OPTIONS` itself.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::index))
        .route("/stats", get(handlers::get_stats))
        .layer(cors)
        .with_state(state)
}
