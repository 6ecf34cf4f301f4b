//! Activity catalog configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where the activity catalog is seeded from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML seed file; the built-in catalog is used when unset
    pub seed_path: Option<String>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.seed_path {
            if !Path::new(path).is_file() {
                return Err(ValidationError::SeedFileNotFound(path.clone()));
            }
        }
        Ok(())
    }
}
