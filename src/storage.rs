use crate::catalog::{Catalog, CatalogSeed};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read-only source of the catalog a session starts from
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the seed catalog, or an empty one when the file does not exist
    ///
    /// Every entry goes through the catalog checks; the first violation fails
    /// the load.
    pub fn load(&self, unique_names: bool) -> Result<Catalog> {
        if !self.file_path.exists() {
            return Ok(Catalog::with_unique_names(unique_names));
        }

        let content = fs::read_to_string(&self.file_path)?;
        let seed: CatalogSeed = toml::from_str(&content)
            .with_context(|| format!("Invalid catalog file {}", self.file_path.display()))?;
        let catalog = seed
            .into_catalog(unique_names)
            .with_context(|| format!("Rejected catalog file {}", self.file_path.display()))?;

        info!(
            path = %self.file_path.display(),
            classes = catalog.classes().len(),
            tasks = catalog.task_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
