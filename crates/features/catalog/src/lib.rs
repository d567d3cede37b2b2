//! # Lesson Catalog
//!
//! The curriculum shown on the landing page, compiled into the binary as `static`
//! data, plus the read-only projections the page is rendered from.
//!
//! * [`Catalog::modules`] - every module and lesson, in declared order, unfiltered.
//! * [`Catalog::featured_lessons`] - lessons flagged `featured`, across modules, in
//!   catalog order.
//! * [`Catalog::validate`] - authoring-time checks (unique ids, URL consistency).
//!
//! The catalog is immutable: a [`Catalog`] is a `Copy` view over `'static` slices and
//! can be handed to any thread or request without synchronization.
//!
//! ```rust
//! use academy_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let featured: Vec<_> = catalog.featured_lessons().iter().map(|l| l.id).collect();
//! assert_eq!(featured, ["m2l1"]);
//! ```

mod data;
mod error;
pub mod validate;

pub use crate::data::NOTEBOOK_BASE;
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::validate::{Issue, Severity, ValidationReport};
use academy_domain::{Lesson, Module};
use serde::Serialize;
use tracing::debug;

/// Read-only view over a static list of modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    modules: &'static [Module],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Wraps an arbitrary static module list (tests, alternative curricula).
    #[must_use]
    pub const fn new(modules: &'static [Module]) -> Self {
        Self { modules }
    }

    /// The curriculum compiled into this binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(data::MODULES)
    }

    /// All modules with their lessons, exactly as declared.
    #[must_use]
    pub const fn modules(&self) -> &'static [Module] {
        self.modules
    }

    /// Every lesson, module by module, in declared order.
    pub fn lessons(&self) -> impl Iterator<Item = &'static Lesson> + use<> {
        let modules: &'static [Module] = self.modules;
        modules.iter().flat_map(|module| module.lessons.iter())
    }

    /// Lessons flagged `featured`, in catalog order. Empty when nothing is featured.
    #[must_use]
    pub fn featured_lessons(&self) -> Vec<&'static Lesson> {
        let featured: Vec<_> = self.modules.iter().flat_map(Module::featured).collect();
        debug!(count = featured.len(), "Collected featured lessons");
        featured
    }

    #[must_use]
    pub fn module(&self, key: &str) -> Option<&'static Module> {
        let modules: &'static [Module] = self.modules;
        modules.iter().find(|module| module.key == key)
    }

    #[must_use]
    pub fn lesson(&self, id: &str) -> Option<&'static Lesson> {
        self.lessons().find(|lesson| lesson.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        self.lessons().fold(
            CatalogStats { modules: self.modules.len(), ..CatalogStats::default() },
            |mut stats, lesson| {
                stats.lessons += 1;
                if lesson.call_to_action().is_open() {
                    stats.available += 1;
                } else {
                    stats.coming_soon += 1;
                }
                if lesson.featured {
                    stats.featured += 1;
                }
                stats
            },
        )
    }

    /// Runs the authoring-time checks; see [`validate`] for what is reported.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let report = validate::validate(self.modules);
        debug!(
            errors = report.errors().count(),
            warnings = report.warnings().count(),
            "Validated catalog"
        );
        report
    }
}

/// Summary counts over a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub modules: usize,
    pub lessons: usize,
    /// Lessons whose call-to-action links to a notebook.
    pub available: usize,
    /// Everything else, including `available` lessons without a usable URL.
    pub coming_soon: usize,
    pub featured: usize,
}
