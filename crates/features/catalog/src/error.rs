use std::borrow::Cow;

/// Catalog error type.
#[academy_derive::academy_error]
pub enum CatalogError {
    /// Authoring-time validation rejected the catalog.
    #[error("Catalog validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
