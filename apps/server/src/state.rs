use academy::catalog::Catalog;
use academy::domain::config::AppConfig;
use axum::extract::FromRef;

/// Shared request state. Both fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
}

impl AppState {
    #[must_use]
    pub const fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Catalog {
    fn from_ref(state: &AppState) -> Self {
        state.catalog
    }
}
