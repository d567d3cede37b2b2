use academy::catalog::Catalog;
use academy::domain::config::AppConfig;
use academy::kernel::server::HealthResponse;
use academy_server::Server;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

fn app(config: AppConfig) -> Router {
    Server::builder().config(config).build().unwrap().router()
}

async fn get(app: Router, uri: &str) -> (StatusCode, header::HeaderMap, String) {
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_serves_the_landing_page() {
    let (status, headers, body) = get(app(AppConfig::default()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.starts_with("<!DOCTYPE html>"));
    for lesson in Catalog::builtin().lessons() {
        assert!(body.contains(&format!("id=\"lesson-{}\"", lesson.id)), "missing {}", lesson.id);
    }
}

#[tokio::test]
async fn index_html_is_an_alias() {
    let (_, _, root) = get(app(AppConfig::default()), "/").await;
    let (status, _, alias) = get(app(AppConfig::default()), "/index.html").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(root, alias);
}

#[tokio::test]
async fn page_uses_configured_branding() {
    let mut config = AppConfig::default();
    config.site.title = "Weekend Fine-Tuning Club".to_owned();

    let (_, _, body) = get(app(config), "/").await;
    assert!(body.contains("<title>Weekend Fine-Tuning Club</title>"));
}

#[tokio::test]
async fn health_reports_up_without_caching() {
    let (status, headers, body) = get(app(AppConfig::default()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CACHE_CONTROL].to_str().unwrap().contains("no-store"));

    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "up");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn static_files_are_served_from_the_storage_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("academy.css"), "body { margin: 0; }").unwrap();

    let mut config = AppConfig::default();
    config.storage.static_dir = dir.path().to_path_buf();

    let (status, _, body) = get(app(config.clone()), "/static/academy.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");

    let (status, _, _) = get(app(config), "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let (status, _, _) = get(app(AppConfig::default()), "/lessons/m1l1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn build_rejects_missing_certificates() {
    let mut config = AppConfig::default();
    config.server.ssl = Some(academy::domain::config::SslConfig {
        cert: "/nonexistent/cert.pem".into(),
        key: "/nonexistent/key.pem".into(),
    });

    let err = Server::builder().config(config).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}
