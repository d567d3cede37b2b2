//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight: layered config loading and, behind the `server`
//! feature, the system routes every HTTP app mounts.
//!
//! ## Config loading
//! ```rust,no_run
//! use academy_kernel::config::load_config;
//! use academy_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("academy.toml")).unwrap();
//! assert!(cfg.server.port > 0);
//! ```

pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use academy_domain as domain;
