//! HTTP adapter for activity endpoints.
//!
//! Exposes the activity domain via REST API:
//! - `GET /activities` - List activities with their rosters
//! - `POST /activities/:activity_name/signup?email=` - Sign a student up
//! - `POST /activities/:activity_name/unregister?email=` - Remove a student

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{ActivityApiError, ActivityAppState};
pub use routes::activity_router;
