use academy::features;

#[test]
fn builtin_catalog_initializes() {
    let catalog = academy::init(false).unwrap();
    assert_eq!(catalog, academy::catalog::Catalog::builtin());
}

#[test]
fn builtin_catalog_passes_strict_mode() {
    assert!(academy::init(true).is_ok());
}

#[test]
fn core_features_are_always_enabled() {
    assert!(features::is_enabled("catalog"));
    assert!(features::is_enabled("landing"));
    assert!(!features::is_enabled("progress"));
}
