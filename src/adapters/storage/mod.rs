//! Storage Adapters
//!
//! ## Available Adapters
//!
//! - **InMemoryActivityRepository** - ActivityRepository kept in process memory
//! - **YamlCatalogLoader** - Reads the seed catalog from a YAML file
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryActivityRepository, YamlCatalogLoader};
//!
//! let activities = YamlCatalogLoader::new("./activities.yaml").load().await?;
//! let repository = InMemoryActivityRepository::with_activities(activities);
//! ```

mod in_memory_activity_repository;
mod yaml_catalog_loader;

pub use in_memory_activity_repository::InMemoryActivityRepository;
pub use yaml_catalog_loader::YamlCatalogLoader;
