use crate::render_page;
use academy_catalog::Catalog;
use academy_domain::config::AppConfig;
use axum::Router;
use axum::extract::{FromRef, State};
use axum::response::Html;
use axum::routing::get;

/// Landing routes: `/` and `/index.html`.
///
/// Generic over the app state so the host decides how the catalog and config are stored.
pub fn router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
    Catalog: FromRef<S>,
    AppConfig: FromRef<S>,
{
    Router::<S>::new().route("/", get(index_handler)).route("/index.html", get(index_handler))
}

async fn index_handler(
    State(catalog): State<Catalog>,
    State(config): State<AppConfig>,
) -> Html<String> {
    Html(render_page(&catalog, &config.site))
}
