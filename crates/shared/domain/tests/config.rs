use academy_domain::config::{AppConfig, ServerConfig, SiteConfig, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let site = SiteConfig::default();
    assert_eq!(site.title, "Fine-Tuning Academy");
    assert_eq!(site.lang, "en");
    assert_eq!(site.links.len(), 3);

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, std::path::PathBuf::from("public"));
    assert_eq!(storage.output_dir, std::path::PathBuf::from("dist"));
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "site": {
            "title": "Academy",
            "links": [{ "label": "Docs", "url": "https://example.org/docs" }]
        },
        "storage": { "output_dir": "/tmp/site" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.site.title, "Academy");
    assert_eq!(cfg.site.tagline, SiteConfig::default().tagline);
    assert_eq!(cfg.site.links.len(), 1);
    assert_eq!(cfg.storage.output_dir, std::path::PathBuf::from("/tmp/site"));
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("public"));
}

#[test]
fn mutating_a_clone_leaves_the_original() {
    let original = AppConfig::default();
    let mut copy = original.clone();
    copy.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(copy.server.port, 9000);
}
