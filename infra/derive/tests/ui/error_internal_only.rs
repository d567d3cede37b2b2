use std::borrow::Cow;

#[academy_derive::academy_error]
#[derive(Debug)]
pub enum CatalogError {
    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: CatalogError = String::from("duplicate lesson id").into();
    assert!(matches!(err, CatalogError::Internal { .. }));

    let validation: Result<(), CatalogError> = Err(CatalogError::Validation {
        message: "2 issues".into(),
        context: None,
    });
    let err = validation.context("strict mode").unwrap_err();
    assert_eq!(err.to_string(), "Validation failed (strict mode): 2 issues");
}
