//! HTTP plumbing shared by the apps.

mod health;
pub mod router;

pub use health::{HealthResponse, start_clock};
