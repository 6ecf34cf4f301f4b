//! HTTP handlers for activity endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::activity::{
    ListActivitiesHandler, ListActivitiesQuery, SignUpCommand, SignUpHandler, UnregisterCommand,
    UnregisterHandler,
};
use crate::domain::activity::ActivityError;
use crate::ports::ActivityRepository;

use super::dto::{ActivitiesResponse, EmailQuery, ErrorResponse, MessageResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the activity endpoints.
///
/// Cloned for each request; the repository is shared behind an `Arc`.
#[derive(Clone)]
pub struct ActivityAppState {
    pub activity_repository: Arc<dyn ActivityRepository>,
    /// Reject signups past `max_participants` (off by default).
    pub enforce_capacity: bool,
}

impl ActivityAppState {
    pub fn new(activity_repository: Arc<dyn ActivityRepository>, enforce_capacity: bool) -> Self {
        Self {
            activity_repository,
            enforce_capacity,
        }
    }

    pub fn list_activities_handler(&self) -> ListActivitiesHandler {
        ListActivitiesHandler::new(self.activity_repository.clone())
    }

    pub fn sign_up_handler(&self) -> SignUpHandler {
        SignUpHandler::new(self.activity_repository.clone(), self.enforce_capacity)
    }

    pub fn unregister_handler(&self) -> UnregisterHandler {
        UnregisterHandler::new(self.activity_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /activities - List every activity with its roster
pub async fn list_activities(
    State(state): State<ActivityAppState>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let handler = state.list_activities_handler();
    let activities = handler.handle(ListActivitiesQuery).await?;
    Ok(Json(ActivitiesResponse::from(activities)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /activities/:activity_name/signup?email= - Sign a student up
pub async fn sign_up(
    State(state): State<ActivityAppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let handler = state.sign_up_handler();
    let cmd = SignUpCommand {
        activity_name,
        email: query.email.unwrap_or_default(),
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(MessageResponse::new(result.message())))
}

/// POST /activities/:activity_name/unregister?email= - Remove a student
pub async fn unregister(
    State(state): State<ActivityAppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, ActivityApiError> {
    let handler = state.unregister_handler();
    let cmd = UnregisterCommand {
        activity_name,
        email: query.email.unwrap_or_default(),
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(MessageResponse::new(result.message())))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ActivityApiError(ActivityError);

impl ActivityApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ActivityError::NotFound(_) => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp { .. }
            | ActivityError::NotSignedUp { .. }
            | ActivityError::ActivityFull { .. } => StatusCode::BAD_REQUEST,
            ActivityError::InvalidEmail(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ActivityError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ActivityError> for ActivityApiError {
    fn from(err: ActivityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ActivityApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Activity request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Activity request rejected");
        }

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}
