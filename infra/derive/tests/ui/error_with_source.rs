use academy_derive::academy_error;
use std::borrow::Cow;

#[academy_error]
pub enum DemoError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<String, DemoError> {
    let value = std::fs::read_to_string("/definitely/not/here.toml").context("Reading settings")?;
    Ok(value)
}

fn main() {
    let err = read_missing().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert!(err.to_string().starts_with("I/O error (Reading settings): "));

    let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let converted: DemoError = io.into();
    assert_eq!(converted.to_string(), "I/O error: boom");

    let internal: DemoError = "broken invariant".into();
    let internal: Result<(), DemoError> = Err(internal);
    let internal = internal.context("Rendering").unwrap_err();
    assert_eq!(internal.to_string(), "Internal error (Rendering): broken invariant");
}
