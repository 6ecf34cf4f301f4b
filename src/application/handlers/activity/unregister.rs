//! UnregisterHandler - Command handler for removing a student from an activity.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::Email;
use crate::ports::ActivityRepository;

/// Command to remove a student from an activity.
#[derive(Debug, Clone)]
pub struct UnregisterCommand {
    pub activity_name: String,
    pub email: String,
}

/// Result of a successful unregistration.
#[derive(Debug, Clone)]
pub struct UnregisterResult {
    pub activity: Activity,
    pub email: Email,
}

impl UnregisterResult {
    /// Confirmation shown to the student.
    pub fn message(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity.name())
    }
}

/// Handler for leaving an activity.
pub struct UnregisterHandler {
    repository: Arc<dyn ActivityRepository>,
}

impl UnregisterHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UnregisterCommand) -> Result<UnregisterResult, ActivityError> {
        if self
            .repository
            .find_by_name(&cmd.activity_name)
            .await?
            .is_none()
        {
            return Err(ActivityError::not_found(cmd.activity_name));
        }

        let email = Email::new(cmd.email)?;

        let activity = self.repository.unregister(&cmd.activity_name, &email).await?;

        tracing::info!(
            activity = %activity.name(),
            email = %email,
            participants = activity.participants().len(),
            "Student unregistered"
        );

        Ok(UnregisterResult { activity, email })
    }
}
