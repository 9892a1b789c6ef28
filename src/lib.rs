pub mod index;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Routing table
/// Registers each handler against its route and serves the static
/// assets the pages reference, with per-request tracing
pub fn router() -> Router {
    Router::new()
        .route("/", get(index::get))
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
}
