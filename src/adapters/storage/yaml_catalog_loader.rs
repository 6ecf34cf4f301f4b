//! YAML Catalog Loader
//!
//! Reads the activity seed catalog from a YAML file on disk.
//!
//! ```yaml
//! - name: Chess Club
//!   description: Learn strategies and compete in chess tournaments
//!   schedule: Fridays, 3:30 PM - 5:00 PM
//!   max_participants: 12
//!   participants:
//!     - michael@mergington.edu
//! ```

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::activity::{build_catalog, Activity, ActivitySeed, CatalogError};

/// Loads activities from a YAML seed file
#[derive(Debug, Clone)]
pub struct YamlCatalogLoader {
    path: PathBuf,
}

impl YamlCatalogLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read, parse and validate the catalog file
    pub async fn load(&self) -> Result<Vec<Activity>, CatalogError> {
        let content = fs::read_to_string(&self.path).await?;
        Self::parse(&content)
    }

    /// Parse and validate catalog YAML
    pub fn parse(content: &str) -> Result<Vec<Activity>, CatalogError> {
        let seeds: Vec<ActivitySeed> = serde_yaml::from_str(content)?;
        build_catalog(seeds)
    }
}
