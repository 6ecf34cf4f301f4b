//! In-Memory Activity Repository Adapter
//!
//! Keeps the activity catalog and rosters in process memory. Everything is
//! lost when the process exits.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::{DomainError, Email};
use crate::ports::ActivityRepository;

/// In-memory store for activities.
///
/// Activities are kept in a `Vec` so listing preserves catalog order; lookups
/// by name are linear.
#[derive(Debug, Clone)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl InMemoryActivityRepository {
    /// Create a repository seeded with the given activities
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, DomainError> {
        Ok(self.activities.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError> {
        let activities = self.activities.read().await;
        Ok(activities.iter().find(|a| a.name() == name).cloned())
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &Email,
        enforce_capacity: bool,
    ) -> Result<Activity, ActivityError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .iter_mut()
            .find(|a| a.name() == name)
            .ok_or_else(|| ActivityError::not_found(name))?;

        activity.sign_up(email.clone(), enforce_capacity)?;
        Ok(activity.clone())
    }

    async fn unregister(&self, name: &str, email: &Email) -> Result<Activity, ActivityError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .iter_mut()
            .find(|a| a.name() == name)
            .ok_or_else(|| ActivityError::not_found(name))?;

        activity.unregister(email)?;
        Ok(activity.clone())
    }
}
