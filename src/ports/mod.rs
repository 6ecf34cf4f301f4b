//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ActivityRepository` - Activity catalog and roster store

mod activity_repository;

pub use activity_repository::ActivityRepository;
