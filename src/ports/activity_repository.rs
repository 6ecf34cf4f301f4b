//! Activity repository port.
//!
//! Defines the contract for the activity store. The HTTP layer never touches
//! the activity mapping directly; it goes through this port, so the in-memory
//! store can later be swapped for a persistent backend.
//!
//! # Example
//!
//! ```ignore
//! async fn enroll(repo: &dyn ActivityRepository, email: &Email) -> Result<(), ActivityError> {
//!     let activity = repo.sign_up("Chess Club", email, false).await?;
//!     tracing::info!(count = activity.participants().len(), "enrolled");
//!     Ok(())
//! }
//! ```

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::{DomainError, Email};
use async_trait::async_trait;

/// Repository port for the activity catalog and rosters.
///
/// Implementations must ensure:
/// - `list` returns activities in catalog (seed) order
/// - the lookup and the roster change of `sign_up`/`unregister` happen
///   atomically with respect to other calls on the same store
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Snapshot of every activity, in catalog order.
    async fn list(&self) -> Result<Vec<Activity>, DomainError>;

    /// Find an activity by its exact name.
    ///
    /// Returns `None` if no activity has this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DomainError>;

    /// Add a student to an activity roster and return the updated activity.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the activity doesn't exist
    /// - `AlreadySignedUp` if the email is already on the roster
    /// - `ActivityFull` if `enforce_capacity` is set and the roster is full
    async fn sign_up(
        &self,
        name: &str,
        email: &Email,
        enforce_capacity: bool,
    ) -> Result<Activity, ActivityError>;

    /// Remove a student from an activity roster and return the updated activity.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the activity doesn't exist
    /// - `NotSignedUp` if the email is not on the roster
    async fn unregister(&self, name: &str, email: &Email) -> Result<Activity, ActivityError>;
}
