//! Application router assembly.
//!
//! Combines the activity API with the root redirect, the health probe, the
//! static front-end and the tower-http middleware stack.

use std::time::Duration;

use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

use super::activities::{activity_router, ActivityAppState};

/// Page the root path redirects to.
pub const INDEX_PATH: &str = "/static/index.html";

/// GET / - Temporary (307) redirect to the static front-end
pub async fn root_redirect() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the complete application router.
pub fn build_router(state: ActivityAppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .merge(activity_router())
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    if let Some(cors) = cors_layer(&config.server.cors_origins_list()) {
        router = router.layer(cors);
    }

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryActivityRepository;
    use crate::config::ServerConfig;
    use crate::domain::activity::default_catalog;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app_with_static(static_dir: &str) -> Router {
        let repository = InMemoryActivityRepository::with_activities(default_catalog().unwrap());
        let state = ActivityAppState::new(Arc::new(repository), false);
        let config = AppConfig {
            server: ServerConfig {
                static_dir: static_dir.to_string(),
                cors_origins: Some("http://localhost:5173".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        build_router(state, &config)
    }

    async fn fetch(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_index() {
        let response = fetch(app_with_static("static"), "/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/static/index.html"
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = fetch(app_with_static("static"), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn static_files_are_served() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("index.html"), "<h1>Mergington</h1>").unwrap();

        let app = app_with_static(temp_dir.path().to_str().unwrap());
        let response = fetch(app, "/static/index.html").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>Mergington</h1>");
    }

    #[tokio::test]
    async fn missing_static_file_is_404() {
        let temp_dir = TempDir::new().unwrap();
        let app = app_with_static(temp_dir.path().to_str().unwrap());
        let response = fetch(app, "/static/nope.html").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cors_layer_skipped_without_origins() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["http://localhost:5173".to_string()]).is_some());
    }
}
