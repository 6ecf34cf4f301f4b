//! Route configuration for activity endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_activities, sign_up, unregister, ActivityAppState};

/// Creates the activity router.
///
/// Routes:
/// - `GET /activities` - List activities keyed by name
/// - `POST /activities/:activity_name/signup?email=` - Sign a student up
/// - `POST /activities/:activity_name/unregister?email=` - Remove a student
pub fn activity_router() -> Router<ActivityAppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(sign_up))
        .route("/activities/:activity_name/unregister", post(unregister))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryActivityRepository;
    use crate::domain::activity::default_catalog;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let repository = InMemoryActivityRepository::with_activities(default_catalog().unwrap());
        let state = ActivityAppState::new(Arc::new(repository), false);
        activity_router().with_state(state)
    }

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn activity_router_creates_router() {
        let _ = app();
    }

    #[tokio::test]
    async fn list_is_mounted() {
        let app = app();
        let (status, body) = send(&app, "GET", "/activities").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("Chess Club").is_some());
    }

    #[tokio::test]
    async fn signup_decodes_activity_name() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/activities/Chess%20Club/signup?email=newstudent@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Signed up newstudent@mergington.edu for Chess Club"
        );
    }

    #[tokio::test]
    async fn unregister_is_mounted() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Unregistered michael@mergington.edu from Chess Club"
        );
    }

    #[tokio::test]
    async fn missing_email_is_unprocessable() {
        let app = app();
        let (status, body) = send(&app, "POST", "/activities/Chess%20Club/signup").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn missing_email_on_unknown_activity_is_not_found() {
        let app = app();
        let (status, _) = send(&app, "POST", "/activities/nonexistent/unregister").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn signup_requires_post() {
        let app = app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/activities/Chess%20Club/signup?email=a@x.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
