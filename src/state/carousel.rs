use crate::catalog::{Catalog, ProductId};
use crate::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// Navigation step through an image sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Next index after stepping from `current` over `len` images, wrapping at both ends
    pub fn step(&self, current: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let last = len - 1;
        match self {
            Direction::Previous if current == 0 => last,
            Direction::Previous => (current - 1).min(last),
            Direction::Next if current >= last => 0,
            Direction::Next => current + 1,
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = StorefrontError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(Direction::Previous),
            1 => Ok(Direction::Next),
            other => Err(StorefrontError::InvalidDirection(other)),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "prev" | "previous" | "left" => Ok(Direction::Previous),
            "next" | "right" => Ok(Direction::Next),
            other => {
                let value: i64 = other
                    .trim_start_matches('+')
                    .parse()
                    .map_err(|_| StorefrontError::Cli(format!("Invalid direction: {}", s)))?;
                Direction::try_from(value)
            }
        }
    }
}

/// Currently displayed image index for every product in the grid
#[derive(Debug, Clone, Default)]
pub struct CarouselTracker {
    indices: HashMap<ProductId, usize>,
}

impl CarouselTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker with every catalog product at image 0
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let mut tracker = Self::new();
        tracker.initialize(catalog.ids());
        tracker
    }

    /// Reset the given products to their first image
    pub fn initialize<I: IntoIterator<Item = ProductId>>(&mut self, product_ids: I) {
        for id in product_ids {
            self.indices.insert(id, 0);
        }
    }

    /// Move one image in `direction`, wrapping around, and return the new index
    pub fn advance(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        direction: Direction,
    ) -> Result<usize> {
        let product = catalog.find_by_id(product_id)?;
        let current = self.indices.get(&product_id).copied().unwrap_or(0);
        let next = direction.step(current, product.image_count());

        trace!(product_id = %product_id, current, next, "Carousel advanced");
        self.indices.insert(product_id, next);
        Ok(next)
    }

    pub fn get(&self, product_id: ProductId) -> Result<usize> {
        self.indices
            .get(&product_id)
            .copied()
            .ok_or(StorefrontError::UnknownProduct(product_id))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Price, Product};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(
                1,
                "Three Views",
                "Tops",
                Price::from_cents(100),
                vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
            ),
            Product::new(2, "Single", "Tops", Price::from_cents(100), vec!["only.jpg".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_initialize_sets_zero() {
        let catalog = catalog();
        let tracker = CarouselTracker::for_catalog(&catalog);
        assert_eq!(tracker.get(ProductId(1)).unwrap(), 0);
        assert_eq!(tracker.get(ProductId(2)).unwrap(), 0);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_wraps_both_ends() {
        let catalog = catalog();
        let mut tracker = CarouselTracker::for_catalog(&catalog);

        assert_eq!(tracker.advance(&catalog, ProductId(1), Direction::Previous).unwrap(), 2);
        assert_eq!(tracker.advance(&catalog, ProductId(1), Direction::Next).unwrap(), 0);
        assert_eq!(tracker.advance(&catalog, ProductId(1), Direction::Next).unwrap(), 1);
    }

    #[test]
    fn test_single_image_stays_put() {
        let catalog = catalog();
        let mut tracker = CarouselTracker::for_catalog(&catalog);
        for direction in [Direction::Next, Direction::Previous, Direction::Next] {
            assert_eq!(tracker.advance(&catalog, ProductId(2), direction).unwrap(), 0);
        }
    }

    #[test]
    fn test_unknown_product_fails() {
        let catalog = catalog();
        let mut tracker = CarouselTracker::for_catalog(&catalog);
        assert!(matches!(
            tracker.advance(&catalog, ProductId(42), Direction::Next),
            Err(StorefrontError::UnknownProduct(ProductId(42)))
        ));
        assert!(tracker.get(ProductId(42)).is_err());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(Direction::try_from(-1).unwrap(), Direction::Previous);
        assert_eq!("+1".parse::<Direction>().unwrap(), Direction::Next);
        assert_eq!("prev".parse::<Direction>().unwrap(), Direction::Previous);
        assert!(matches!(
            Direction::try_from(2),
            Err(StorefrontError::InvalidDirection(2))
        ));
        assert!("sideways".parse::<Direction>().is_err());
    }
}
