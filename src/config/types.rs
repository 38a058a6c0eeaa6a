use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_true() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("products.json")
}

/// Session behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Open the cart drawer when an item is added and the drawer is closed
    #[serde(default = "default_true")]
    pub open_cart_on_add: bool,

    /// Prefix used when rendering prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            open_cart_on_add: true,
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Root configuration file structure for storefront.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog document, relative to the config file's directory
    #[serde(default = "default_catalog_path")]
    pub catalog: PathBuf,

    #[serde(default)]
    pub settings: Settings,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog_path(),
            settings: Settings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.open_cart_on_add);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: StorefrontConfig =
            serde_yaml_ng::from_str("settings:\n  currency_symbol: \"€\"\n").unwrap();
        assert_eq!(config.catalog, PathBuf::from("products.json"));
        assert!(config.settings.open_cart_on_add);
        assert_eq!(config.settings.currency_symbol, "€");
    }
}
