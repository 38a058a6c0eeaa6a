use super::types::StorefrontConfig;
use crate::io::paths::StorefrontPaths;
use crate::{Result, StorefrontError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfiguration {
    pub config: StorefrontConfig,
    /// File the configuration was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    /// Directory relative paths resolve against
    pub base_dir: PathBuf,
}

impl LoadedConfiguration {
    pub fn defaults(base_dir: &Path) -> Self {
        Self {
            config: StorefrontConfig::default(),
            source: None,
            base_dir: base_dir.to_path_buf(),
        }
    }

    /// Catalog path with relative paths resolved against the config location
    pub fn catalog_path(&self) -> PathBuf {
        StorefrontPaths::resolve_relative(&self.base_dir, &self.config.catalog)
    }
}

/// Configuration loader for storefront.yaml
pub struct ConfigLoader {
    /// Per-user config file consulted after the project locations
    user_config: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            user_config: StorefrontPaths::new().ok().map(|p| p.config_file()),
        }
    }

    /// Skip the per-user config location
    pub fn without_user_config(mut self) -> Self {
        self.user_config = None;
        self
    }

    /// Use the explicit path when given, otherwise discover from `project_root`
    pub fn load(&self, explicit: Option<&Path>, project_root: &Path) -> Result<LoadedConfiguration> {
        match explicit {
            Some(path) => self.load_config_file(path),
            None => self.discover(project_root),
        }
    }

    /// Load a configuration file; any failure is an error
    pub fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<LoadedConfiguration> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StorefrontError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: StorefrontConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            StorefrontError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        self.validate_config(&config, path)?;

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        debug!(path = %path.display(), "Loaded storefront configuration");
        Ok(LoadedConfiguration {
            config,
            source: Some(path.to_path_buf()),
            base_dir,
        })
    }

    /// Search project then user locations, falling back to defaults
    pub fn discover(&self, project_root: &Path) -> Result<LoadedConfiguration> {
        let mut candidates = StorefrontPaths::project_config_candidates(project_root);
        candidates.extend(self.user_config.clone());

        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            match self.load_config_file(&candidate) {
                Ok(loaded) => return Ok(loaded),
                Err(e) => {
                    warn!(path = %candidate.display(), error = %e, "Skipping unreadable config file");
                }
            }
        }

        debug!("No storefront.yaml found, using defaults");
        Ok(LoadedConfiguration::defaults(project_root))
    }

    fn validate_config(&self, config: &StorefrontConfig, path: &Path) -> Result<()> {
        if config.catalog.as_os_str().is_empty() {
            return Err(StorefrontError::Config(format!(
                "Config file {} has an empty catalog path",
                path.display()
            )));
        }
        if config.settings.currency_symbol.is_empty() {
            return Err(StorefrontError::Config(format!(
                "Config file {} has an empty currency symbol",
                path.display()
            )));
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_resolves_catalog_relative_to_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("storefront.yaml");
        fs::write(
            &config_path,
            "catalog: data/products.yaml\nsettings:\n  open_cart_on_add: false\n",
        )
        .unwrap();

        let loaded = ConfigLoader::new()
            .without_user_config()
            .load_config_file(&config_path)
            .unwrap();

        assert!(!loaded.config.settings.open_cart_on_add);
        assert_eq!(loaded.catalog_path(), dir.path().join("data/products.yaml"));
        assert_eq!(loaded.source.as_deref(), Some(config_path.as_path()));
    }

    #[test]
    fn test_discover_prefers_project_root_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".storefront")).unwrap();
        fs::write(dir.path().join("storefront.yaml"), "catalog: root.json\n").unwrap();
        fs::write(
            dir.path().join(".storefront/storefront.yaml"),
            "catalog: hidden.json\n",
        )
        .unwrap();

        let loaded = ConfigLoader::new()
            .without_user_config()
            .discover(dir.path())
            .unwrap();
        assert_eq!(loaded.catalog_path(), dir.path().join("root.json"));
    }

    #[test]
    fn test_discover_skips_invalid_and_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("storefront.yaml"), "settings: [not, a, map]\n").unwrap();

        let loaded = ConfigLoader::new()
            .without_user_config()
            .discover(dir.path())
            .unwrap();
        assert!(loaded.source.is_none());
        assert_eq!(loaded.catalog_path(), dir.path().join("products.json"));
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "settings:\n  currency_symbol: \"\"\n").unwrap();

        let result = ConfigLoader::new()
            .without_user_config()
            .load(Some(&path), dir.path());
        assert!(matches!(result, Err(StorefrontError::Config(_))));
    }
}
