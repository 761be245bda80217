//! End-to-end smoke tests for the foliod static site server.
//!
//! Each test builds the real router over a temporary site directory and
//! exercises it via `tower::ServiceExt::oneshot`; no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><title>folio</title>";

/// Build a disposable site directory with an index page and one asset.
fn site_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML)
        .expect("index should be written");
    std::fs::write(dir.path().join("app.css"), "body{margin:0}")
        .expect("asset should be written");
    dir
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

async fn get(dir: &tempfile::TempDir, uri: &str) -> axum::response::Response {
    foliod::router::build(dir.path().to_str().expect("temp path should be utf-8"))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request should be handled")
}

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let dir = site_dir();
    let response = get(&dir, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn should_serve_index_when_root_requested() {
    let dir = site_dir();
    let response = get(&dir, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, INDEX_HTML);
}

#[tokio::test]
async fn should_fall_back_to_index_when_client_route_requested() {
    let dir = site_dir();
    for uri in ["/projects", "/resume", "/contact"] {
        let response = get(&dir, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, INDEX_HTML);
    }
}

#[tokio::test]
async fn should_serve_asset_with_content_type_when_present() {
    let dir = site_dir();
    let response = get(&dir, "/app.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"), "{content_type}");
    assert_eq!(body_string(response).await, "body{margin:0}");
}
