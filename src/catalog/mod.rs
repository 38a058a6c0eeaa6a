//! Product catalog loaded once per session.
//!
//! The catalog owns every [`Product`] and hands out shared references. The
//! only field that changes after load is `liked`, through [`Catalog::set_liked`].

pub mod loader;
pub mod money;
pub mod product;

pub use loader::{CatalogFormat, CatalogLoader};
pub use money::Price;
pub use product::{Product, ProductId};

use crate::{Result, StorefrontError};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    /// Position of each product in `products`
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and products without images
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            Self::validate_product(product)?;
            if index.insert(product.id, position).is_some() {
                return Err(StorefrontError::Catalog(format!(
                    "Duplicate product id {}",
                    product.id
                )));
            }
        }

        Ok(Self { products, index })
    }

    fn validate_product(product: &Product) -> Result<()> {
        if product.images.is_empty() {
            return Err(StorefrontError::Catalog(format!(
                "Product {} has no images",
                product.id
            )));
        }
        if product.name.trim().is_empty() {
            return Err(StorefrontError::Catalog(format!(
                "Product {} has an empty name",
                product.id
            )));
        }
        if product.category.trim().is_empty() {
            return Err(StorefrontError::Catalog(format!(
                "Product {} has an empty category",
                product.id
            )));
        }
        Ok(())
    }

    /// Look up a product; an unknown id is a caller bug and fails
    pub fn find_by_id(&self, id: ProductId) -> Result<&Product> {
        self.index
            .get(&id)
            .map(|&position| &self.products[position])
            .ok_or(StorefrontError::UnknownProduct(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn set_liked(&mut self, id: ProductId, value: bool) -> Result<()> {
        let position = *self
            .index
            .get(&id)
            .ok_or(StorefrontError::UnknownProduct(id))?;
        self.products[position].liked = value;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.products.iter().map(|p| p.id)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
