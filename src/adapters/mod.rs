//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API and static front-end
//! - `storage` - Activity store and catalog loading

pub mod http;
pub mod storage;

pub use http::{build_router, ActivityAppState};
pub use storage::{InMemoryActivityRepository, YamlCatalogLoader};
