use crate::state::AppState;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Mounts every route: system (`/health`), landing page, and `/static` assets.
pub(crate) fn init(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.storage.static_dir);

    Router::new()
        .merge(academy::server::router::system_router())
        .merge(academy::server::router::landing_router())
        .nest_service("/static", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
