use crate::catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category that selects the whole catalog
pub const ALL_CATEGORIES: &str = "all";

/// Category predicate for the product grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn new(category: &str) -> Self {
        if category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(category.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => product.category == *category,
        }
    }

    /// Products passing the filter, in catalog order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Category(category) => f.write_str(category),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(category: String) -> Self {
        CategoryFilter::new(&category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::new(s))
    }
}
