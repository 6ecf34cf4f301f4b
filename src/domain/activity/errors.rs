//! Activity-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | AlreadySignedUp | 400 |
//! | NotSignedUp | 400 |
//! | ActivityFull | 400 |
//! | InvalidEmail | 422 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Activity registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// No activity with this name exists.
    NotFound(String),

    /// The student is already on the activity roster.
    AlreadySignedUp { activity: String, email: String },

    /// The student is not on the activity roster.
    NotSignedUp { activity: String, email: String },

    /// The roster has reached `max_participants`.
    ActivityFull {
        activity: String,
        max_participants: u32,
    },

    /// The supplied email address is malformed.
    InvalidEmail(ValidationError),

    /// Infrastructure error.
    Infrastructure(String),
}

impl ActivityError {
    pub fn not_found(activity: impl Into<String>) -> Self {
        ActivityError::NotFound(activity.into())
    }

    pub fn already_signed_up(activity: impl Into<String>, email: impl Into<String>) -> Self {
        ActivityError::AlreadySignedUp {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn not_signed_up(activity: impl Into<String>, email: impl Into<String>) -> Self {
        ActivityError::NotSignedUp {
            activity: activity.into(),
            email: email.into(),
        }
    }

    pub fn activity_full(activity: impl Into<String>, max_participants: u32) -> Self {
        ActivityError::ActivityFull {
            activity: activity.into(),
            max_participants,
        }
    }

    pub fn invalid_email(err: ValidationError) -> Self {
        ActivityError::InvalidEmail(err)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ActivityError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ActivityError::NotFound(_) => ErrorCode::ActivityNotFound,
            ActivityError::AlreadySignedUp { .. } => ErrorCode::AlreadySignedUp,
            ActivityError::NotSignedUp { .. } => ErrorCode::NotSignedUp,
            ActivityError::ActivityFull { .. } => ErrorCode::ActivityFull,
            ActivityError::InvalidEmail(_) => ErrorCode::ValidationFailed,
            ActivityError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            ActivityError::NotFound(activity) => format!("Activity not found: {}", activity),
            ActivityError::AlreadySignedUp { activity, email } => {
                format!("Student {} is already signed up for {}", email, activity)
            }
            ActivityError::NotSignedUp { activity, email } => {
                format!("Student {} is not signed up for {}", email, activity)
            }
            ActivityError::ActivityFull {
                activity,
                max_participants,
            } => format!(
                "{} is full ({} participants maximum)",
                activity, max_participants
            ),
            ActivityError::InvalidEmail(err) => err.to_string(),
            ActivityError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ActivityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ActivityError {}

impl From<ValidationError> for ActivityError {
    fn from(err: ValidationError) -> Self {
        ActivityError::InvalidEmail(err)
    }
}

impl From<DomainError> for ActivityError {
    fn from(err: DomainError) -> Self {
        ActivityError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_mentions_not_found() {
        let err = ActivityError::not_found("Underwater Basket Weaving");
        assert_eq!(err.code(), ErrorCode::ActivityNotFound);
        assert!(err.message().to_lowercase().contains("not found"));
    }

    #[test]
    fn already_signed_up_message_mentions_already_signed_up() {
        let err = ActivityError::already_signed_up("Chess Club", "michael@mergington.edu");
        assert_eq!(err.code(), ErrorCode::AlreadySignedUp);
        assert_eq!(
            err.message(),
            "Student michael@mergington.edu is already signed up for Chess Club"
        );
    }

    #[test]
    fn not_signed_up_message_mentions_not_signed_up() {
        let err = ActivityError::not_signed_up("Chess Club", "nobody@mergington.edu");
        assert_eq!(err.code(), ErrorCode::NotSignedUp);
        assert!(err.message().to_lowercase().contains("not signed up"));
    }

    #[test]
    fn activity_full_reports_capacity() {
        let err = ActivityError::activity_full("Chess Club", 12);
        assert_eq!(err.code(), ErrorCode::ActivityFull);
        assert_eq!(err.message(), "Chess Club is full (12 participants maximum)");
    }

    #[test]
    fn validation_error_converts_to_invalid_email() {
        let err: ActivityError = ValidationError::empty_field("email").into();
        assert!(matches!(err, ActivityError::InvalidEmail(_)));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn domain_error_converts_to_infrastructure() {
        let err: ActivityError = DomainError::new(ErrorCode::StorageError, "disk gone").into();
        assert!(matches!(err, ActivityError::Infrastructure(_)));
        assert!(err.message().contains("disk gone"));
    }

    #[test]
    fn display_uses_message() {
        let err = ActivityError::not_found("Nonexistent");
        assert_eq!(format!("{}", err), err.message());
    }
}
