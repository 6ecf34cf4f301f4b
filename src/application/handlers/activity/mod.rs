//! Activity handlers.
//!
//! ## Commands
//! - Signing a student up for an activity
//! - Unregistering a student from an activity
//!
//! ## Queries
//! - Listing the activity catalog

mod list_activities;
mod sign_up;
mod unregister;

// Commands
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};
pub use unregister::{UnregisterCommand, UnregisterHandler, UnregisterResult};

// Queries
pub use list_activities::{ListActivitiesHandler, ListActivitiesQuery, ListActivitiesResult};
