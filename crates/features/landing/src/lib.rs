//! # Landing Page
//!
//! Server-side rendering of the catalog into a single, self-contained HTML5 document.
//!
//! The page is built from Dioxus components (`rsx!`) and rendered to a string with
//! `dioxus-ssr`; no client-side runtime is shipped. Sections, top to bottom: hero,
//! highlights, quick start, "Start Here" (only when something is featured), all
//! lessons by module, footer.
//!
//! ```rust
//! use academy_catalog::Catalog;
//! use academy_domain::config::SiteConfig;
//!
//! let html = academy_landing::render_page(&Catalog::builtin(), &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! With the `server` feature, [`router`] exposes the page over HTTP.

mod components;
mod error;
mod page;
#[cfg(feature = "server")]
mod router;

pub use crate::error::{RenderError, RenderErrorExt};
pub use crate::page::{render_page, write_page};
#[cfg(feature = "server")]
pub use crate::router::router;
