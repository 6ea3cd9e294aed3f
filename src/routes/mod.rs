use crate::state::State;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod page;

/// Pages at the root, the JSON api under `/api`, and anything else looked up in `public_dir`.
pub fn app(state: Arc<State>, public_dir: &std::path::Path) -> axum::Router {
    let static_files = tower::ServiceBuilder::new()
        .layer(
            CompressionLayer::new()
                .br(true)
                .quality(tower_http::CompressionLevel::Best),
        )
        .service(ServeDir::new(public_dir));

    axum::Router::new()
        .merge(page::route())
        .nest("/api", api::route())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
