//! HTTP DTOs (Data Transfer Objects) for activity endpoints.
//!
//! These types define the JSON request/response structure for the activity API.
//! They serve as the boundary between HTTP and the application layer.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::domain::activity::Activity;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string of the signup and unregister endpoints.
///
/// `email` is optional here so a missing value is reported by the handler
/// after the activity lookup, with the API's own error body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One activity in the listing, keyed by name in [`ActivitiesResponse`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActivityResponse {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
    /// Open places left, zero once the roster reaches capacity.
    pub spots_left: u32,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity
                .participants()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            spots_left: activity.spots_left(),
        }
    }
}

/// Activity name → details, serialized as a JSON object in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ActivitiesResponse {
    entries: Vec<(String, ActivityResponse)>,
}

impl ActivitiesResponse {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Activity>> for ActivitiesResponse {
    fn from(activities: Vec<Activity>) -> Self {
        Self {
            entries: activities
                .iter()
                .map(|a| (a.name().to_string(), ActivityResponse::from(a)))
                .collect(),
        }
    }
}

impl Serialize for ActivitiesResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

/// Confirmation of a roster change.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
    /// Error code for programmatic handling.
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            error_code: error_code.into(),
        }
    }
}
