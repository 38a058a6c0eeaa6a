use crate::{Result, StorefrontError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the configuration file in every search location
pub const CONFIG_FILE_NAME: &str = "storefront.yaml";

/// Path management for storefront configuration files
#[derive(Debug, Clone)]
pub struct StorefrontPaths {
    /// Configuration directory (.storefront/ or the platform config dir)
    pub config_dir: PathBuf,
}

impl StorefrontPaths {
    /// Create new paths instance using the per-user platform directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "storefront").ok_or_else(|| {
            StorefrontError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths for a specific project directory
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            config_dir: project_root.join(".storefront"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Project-level config locations, highest priority first
    pub fn project_config_candidates(project_root: &Path) -> Vec<PathBuf> {
        vec![
            project_root.join(CONFIG_FILE_NAME),
            Self::for_project(project_root).config_file(),
        ]
    }

    /// Resolve `path` against `base` unless it is already absolute
    pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}
