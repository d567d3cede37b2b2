use std::borrow::Cow;

/// Landing page error type.
#[academy_derive::academy_error]
pub enum RenderError {
    /// Writing the rendered document failed.
    #[error("Page I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal render error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
