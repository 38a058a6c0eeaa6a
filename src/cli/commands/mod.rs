pub mod inspect;
pub mod session;
pub mod validate;

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::{ConfigLoader, LoadedConfiguration, Settings};
use crate::{Result, StorefrontError};
use std::path::PathBuf;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Where a command finds its configuration and catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    /// Explicit config file from `--config`
    pub config: Option<PathBuf>,
    /// Explicit catalog file, overriding the configured one
    pub catalog: Option<PathBuf>,
}

impl CatalogSource {
    pub fn new(config: Option<PathBuf>, catalog: Option<PathBuf>) -> Self {
        Self { config, catalog }
    }

    pub fn configuration(&self) -> Result<LoadedConfiguration> {
        let current_dir = std::env::current_dir().map_err(|e| {
            StorefrontError::Config(format!("Failed to get current directory: {}", e))
        })?;
        ConfigLoader::new().load(self.config.as_deref(), &current_dir)
    }

    /// Load settings and the catalog they point at
    pub fn load(&self, loader: &CatalogLoader) -> Result<(Catalog, Settings)> {
        let loaded = self.configuration()?;
        let catalog_path = self
            .catalog
            .clone()
            .unwrap_or_else(|| loaded.catalog_path());
        let catalog = loader.load(&catalog_path)?;
        Ok((catalog, loaded.config.settings))
    }
}
