use super::money::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable product identifier as it appears in the catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ProductId)
            .map_err(|_| format!("Invalid product id: {}", s))
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

/// A purchasable product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    /// Optional label shown over the first image ("New", "Sale", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Image references in display order, never empty once in a catalog
    pub images: Vec<String>,
    #[serde(default)]
    pub liked: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        images: Vec<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category: category.into(),
            price,
            badge: None,
            images,
            liked: false,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn first_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Index of the last image, 0 for single-image products
    pub fn last_image_index(&self) -> usize {
        self.images.len().saturating_sub(1)
    }
}
