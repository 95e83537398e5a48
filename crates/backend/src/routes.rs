use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::shared::logger::request_logger;

/// Static site: `/health` plus every file of the trunk bundle.
pub fn configure_routes(dist_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(dist_dir))
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn dist_with_site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<title>English 15</title>").unwrap();
        std::fs::write(dir.path().join("Eng15Infographic1.png"), [137u8, 80, 78, 71]).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_health() {
        let dir = dist_with_site();
        let (status, body) = get(configure_routes(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = dist_with_site();
        let (status, body) = get(configure_routes(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<title>English 15</title>");
    }

    #[tokio::test]
    async fn test_serves_image_from_site_root() {
        let dir = dist_with_site();
        let (status, body) = get(configure_routes(dir.path()), "/Eng15Infographic1.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, vec![137u8, 80, 78, 71]);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = dist_with_site();
        let (status, _) = get(configure_routes(dir.path()), "/Eng15Infographic2.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
