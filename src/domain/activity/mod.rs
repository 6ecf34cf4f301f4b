//! Activity domain module.
//!
//! Extracurricular activities and their participant rosters.
//!
//! # Module Structure
//!
//! - `aggregate` - Activity aggregate entity
//! - `catalog` - Seed catalog and its validation
//! - `errors` - ActivityError

mod aggregate;
mod catalog;
mod errors;

pub use aggregate::Activity;
pub use catalog::{build_catalog, default_catalog, default_seeds, ActivitySeed, CatalogError};
pub use errors::ActivityError;
