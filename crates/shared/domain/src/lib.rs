//! # Domain Models
//!
//! Pure catalog and configuration types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod lesson;
pub mod module;

pub use lesson::{CallToAction, Lesson, LessonStatus};
pub use module::Module;
