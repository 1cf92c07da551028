//! HTTP server for the landing page.
//!
//! Serves the Trunk build output. Any path that is not a file falls back
//! to `index.html` so client-side routes load the app.
//!
//! # Endpoints
//!
//! | Method | Path      | Description                      |
//! |--------|-----------|----------------------------------|
//! | GET    | `/health` | Health check                     |
//! | GET    | `/*`      | Static files, `index.html` fallback |

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::types::HealthResponse;
use crate::config::{inspect_dist, SiteConfig};
use crate::error::SiteResult;

/// Build the router serving `config.dist`.
pub fn router(config: &SiteConfig, hero_image: bool) -> Router {
    // Assets are read-only; any origin may fetch them.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::ACCEPT]);

    let static_files =
        ServeDir::new(&config.dist).fallback(ServeFile::new(config.index_path()));

    Router::new()
        .route("/health", get(move || health(hero_image)))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Check the dist directory, then serve it until the process stops.
pub async fn start_server(config: SiteConfig) -> SiteResult<()> {
    let port = config.checked_port()?;
    let report = inspect_dist(&config.dist)?;
    if report.hero_image.is_none() {
        tracing::warn!(
            dist = %config.dist.display(),
            "hero image missing, the page will show a broken image"
        );
    }

    let app = router(&config, report.hero_image.is_some());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, dist = %config.dist.display(), "💈 salon site running");
    tracing::info!("   GET  /        - landing page");
    tracing::info!("   GET  /health  - health check");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(hero_image: bool) -> Json<HealthResponse> {
    Json(HealthResponse::ok(hero_image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn site() -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html>מספרה ביתא</html>").unwrap();
        fs::write(dir.path().join("modern-salon.jpg"), b"\xff\xd8\xff").unwrap();
        let config = SiteConfig {
            dist: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };
        (dir, config)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, config) = site();
        let (status, body) = get(router(&config, true), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health, HealthResponse::ok(true));
    }

    #[tokio::test]
    async fn test_serves_hero_image() {
        let (_dir, config) = site();
        let (status, body) = get(router(&config, true), "/modern-salon.jpg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"\xff\xd8\xff");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (_dir, config) = site();
        for uri in ["/", "/booking", "/some/deep/route"] {
            let (status, body) = get(router(&config, true), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(String::from_utf8(body).unwrap().contains("מספרה ביתא"));
        }
    }

    #[tokio::test]
    async fn test_start_server_rejects_empty_dist() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            dist: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };
        let err = start_server(config).await.unwrap_err();
        assert!(matches!(err, crate::error::SiteError::MissingIndex(_)));
    }
}
