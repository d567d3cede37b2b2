//! Facade crate for Fine-Tuning Academy features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices the apps are built from.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `academy` with the desired feature flags (`server`).
//! - Call [`init`] once at startup to obtain a validated [`Catalog`](catalog::Catalog).

pub use academy_catalog as catalog;
pub use academy_domain as domain;
pub use academy_kernel as kernel;
pub use academy_landing as landing;
use tracing::{info, warn};

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use academy_kernel::server::router::system_router;
        pub use academy_landing::router as landing_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "catalog",
        "landing",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Loads the built-in catalog and validates it, logging every finding.
///
/// # Errors
/// Returns [`CatalogError::Validation`](catalog::CatalogError::Validation) when the
/// catalog has errors, or warnings while `strict` is set.
pub fn init(strict: bool) -> Result<catalog::Catalog, catalog::CatalogError> {
    let catalog = catalog::Catalog::builtin();
    let report = catalog.validate();

    for issue in report.issues() {
        warn!(severity = ?issue.severity(), "Catalog: {issue}");
    }
    report.into_result(strict)?;

    let stats = catalog.stats();
    info!(
        modules = stats.modules,
        lessons = stats.lessons,
        available = stats.available,
        featured = stats.featured,
        "Catalog ready"
    );

    Ok(catalog)
}
