//! HTTP adapters - REST API implementations.
//!
//! - `activities` - Activity listing, signup and unregister endpoints
//! - `app` - Full router: redirect, health, static files, middleware

pub mod activities;
pub mod app;

// Re-export key types for convenience
pub use activities::activity_router;
pub use activities::ActivityAppState;
pub use app::build_router;
