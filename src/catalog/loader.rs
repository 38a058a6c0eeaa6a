use super::{Catalog, Product};
use crate::{Result, StorefrontError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Supported catalog document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        }
    }
}

/// A catalog document is either a bare product list or `{ products: [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl CatalogDocument {
    fn into_products(self) -> Vec<Product> {
        match self {
            CatalogDocument::List(products) | CatalogDocument::Wrapped { products } => products,
        }
    }
}

/// Loads and validates catalog documents
#[derive(Debug, Default)]
pub struct CatalogLoader {
    /// Reject catalogs with no products
    strict: bool,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Enable strict validation mode
    pub fn with_strict_validation(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Load a catalog file, choosing the parser by extension
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StorefrontError::Catalog(format!(
                "Failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;

        let format = CatalogFormat::from_path(path);
        debug!(path = %path.display(), ?format, "Parsing catalog document");

        let catalog = self.parse(&contents, format).map_err(|e| match e {
            StorefrontError::Catalog(msg) => {
                StorefrontError::Catalog(format!("{}: {}", path.display(), msg))
            }
            other => StorefrontError::Catalog(format!(
                "Failed to parse catalog file {}: {}",
                path.display(),
                other
            )),
        })?;

        info!(
            path = %path.display(),
            products = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn parse(&self, contents: &str, format: CatalogFormat) -> Result<Catalog> {
        let document: CatalogDocument = match format {
            CatalogFormat::Json => serde_json::from_str(contents)?,
            CatalogFormat::Yaml => serde_yaml_ng::from_str(contents)?,
        };

        let catalog = Catalog::new(document.into_products())?;
        if self.strict && catalog.is_empty() {
            return Err(StorefrontError::Catalog(
                "Catalog contains no products".to_string(),
            ));
        }
        Ok(catalog)
    }
}
