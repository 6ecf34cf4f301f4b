//! ListActivitiesHandler - Query handler for the activity catalog.

use std::sync::Arc;

use crate::domain::activity::{Activity, ActivityError};
use crate::ports::ActivityRepository;

/// Query to list every activity.
#[derive(Debug, Clone, Default)]
pub struct ListActivitiesQuery;

/// Result of the activity listing, in catalog order.
pub type ListActivitiesResult = Vec<Activity>;

/// Handler for listing activities.
///
/// Returns the full catalog as stored: no filtering, no pagination.
pub struct ListActivitiesHandler {
    repository: Arc<dyn ActivityRepository>,
}

impl ListActivitiesHandler {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        _query: ListActivitiesQuery,
    ) -> Result<ListActivitiesResult, ActivityError> {
        self.repository
            .list()
            .await
            .map_err(|e| ActivityError::infrastructure(e.to_string()))
    }
}
