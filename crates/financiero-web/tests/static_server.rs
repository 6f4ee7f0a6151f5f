//! Integration tests for the static SPA server

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"root\"></div></body></html>";

fn dist_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('app');").unwrap();
    dir
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let dist = dist_dir();
    let router = financiero_web::create_router(dist.path());

    let (status, body) = get(router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["sections"], 7);
}

#[tokio::test]
async fn test_serves_static_asset() {
    let dist = dist_dir();
    let router = financiero_web::create_router(dist.path());

    let (status, body) = get(router, "/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('app');");
}

#[tokio::test]
async fn test_deep_links_fall_back_to_index() {
    let dist = dist_dir();

    for path in ["/", "/income", "/settings", "/unknown/deep/link"] {
        let router = financiero_web::create_router(dist.path());
        let (status, body) = get(router, path).await;

        assert_eq!(status, StatusCode::OK, "path {}", path);
        assert!(body.contains("id=\"root\""), "path {}", path);
    }
}
