#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the academy workspace.
//!
//! * [`academy_error`] turns a plain enum into a `thiserror` error with context support.
//! * [`main`] bootstraps the Tokio runtime profiles from `academy-runtime`.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros
//! in doctests; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro that replaces `async fn main` with a synchronous entry point
/// driving a pre-configured Tokio runtime.
///
/// # Arguments
///
/// * `high_performance` - Larger stacks and long keep-alive, for the HTTP server.
/// * `memory_efficient` - Fewer workers and smaller stacks, for short-lived tools.
/// * `default` (or no argument) - Worker count from the available parallelism.
///
/// The annotated function must be `async` and return a `Result`.
///
/// # Examples
///
/// ```rust,ignore
/// #[academy_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]`, unless already derived.
/// * An `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant wrapping a `source` error.
/// * `From<Source>` for every variant with a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. A variant carrying a `source` (by name, `#[source]` or `#[from]`) must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[academy_derive::academy_error]
/// pub enum RenderError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal render error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn write(path: &Path, html: &str) -> Result<(), RenderError> {
///     std::fs::write(path, html).context("Writing landing page")
/// }
/// ```
#[proc_macro_attribute]
pub fn academy_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
