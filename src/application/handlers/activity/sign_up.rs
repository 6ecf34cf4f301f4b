//! SignUpHandler - Command handler for adding a student to an activity.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::Email;
use crate::ports::ActivityRepository;

/// Command to sign a student up for an activity.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub activity_name: String,
    pub email: String,
}

/// Result of a successful signup.
#[derive(Debug, Clone)]
pub struct SignUpResult {
    pub activity: Activity,
    pub email: Email,
}

impl SignUpResult {
    /// Confirmation shown to the student.
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity.name())
    }
}

/// Handler for activity signups.
///
/// The activity is resolved before the email is validated, so an unknown
/// activity is reported as not found whatever email was sent.
pub struct SignUpHandler {
    repository: Arc<dyn ActivityRepository>,
    enforce_capacity: bool,
}

impl SignUpHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>, enforce_capacity: bool) -> Self {
        Self {
            repository,
            enforce_capacity,
        }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, ActivityError> {
        // 1. The activity must exist
        if self
            .repository
            .find_by_name(&cmd.activity_name)
            .await?
            .is_none()
        {
            return Err(ActivityError::not_found(cmd.activity_name));
        }

        // 2. Validate the email
        let email = Email::new(cmd.email)?;

        // 3. Add to the roster
        let activity = self
            .repository
            .sign_up(&cmd.activity_name, &email, self.enforce_capacity)
            .await?;

        tracing::info!(
            activity = %activity.name(),
            email = %email,
            participants = activity.participants().len(),
            max_participants = activity.max_participants(),
            "Student signed up"
        );

        Ok(SignUpResult { activity, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryActivityRepository;
    use crate::domain::activity::default_catalog;
    use crate::domain::foundation::ValidationError;

    fn setup(enforce_capacity: bool) -> (SignUpHandler, Arc<InMemoryActivityRepository>) {
        let repository = Arc::new(InMemoryActivityRepository::with_activities(
            default_catalog().unwrap(),
        ));
        (SignUpHandler::new(repository.clone(), enforce_capacity), repository)
    }

    fn cmd(activity: &str, email: &str) -> SignUpCommand {
        SignUpCommand {
            activity_name: activity.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn signs_up_new_student() {
        let (handler, repository) = setup(false);
        let result = handler
            .handle(cmd("Chess Club", "newstudent@mergington.edu"))
            .await
            .unwrap();

        assert_eq!(
            result.message(),
            "Signed up newstudent@mergington.edu for Chess Club"
        );
        let stored = repository.find_by_name("Chess Club").await.unwrap().unwrap();
        assert_eq!(
            stored.participants().last().map(|e| e.as_str()),
            Some("newstudent@mergington.edu")
        );
    }

    #[tokio::test]
    async fn rejects_duplicate_signup() {
        let (handler, _) = setup(false);
        let err = handler
            .handle(cmd("Chess Club", "michael@mergington.edu"))
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::AlreadySignedUp { .. }));
    }

    #[tokio::test]
    async fn unknown_activity_wins_over_bad_email() {
        let (handler, _) = setup(false);
        let err = handler.handle(cmd("nonexistent", "not-an-email")).await.unwrap_err();
        assert_eq!(err, ActivityError::not_found("nonexistent"));
    }

    #[tokio::test]
    async fn rejects_malformed_email_for_known_activity() {
        let (handler, _) = setup(false);
        let err = handler.handle(cmd("Chess Club", "")).await.unwrap_err();
        assert_eq!(
            err,
            ActivityError::InvalidEmail(ValidationError::empty_field("email"))
        );
    }

    #[tokio::test]
    async fn capacity_is_ignored_unless_enforced() {
        let (handler, _) = setup(false);
        // Math Club seats 10 and starts with 2.
        for i in 0..12 {
            handler
                .handle(cmd("Math Club", &format!("student{}@mergington.edu", i)))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn capacity_is_checked_when_enforced() {
        let (handler, _) = setup(true);
        for i in 0..8 {
            handler
                .handle(cmd("Math Club", &format!("student{}@mergington.edu", i)))
                .await
                .unwrap();
        }
        let err = handler
            .handle(cmd("Math Club", "one-too-many@mergington.edu"))
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::activity_full("Math Club", 10));
    }
}
