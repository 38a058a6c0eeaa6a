use super::carousel::Direction;
use crate::catalog::{Catalog, ProductId};
use crate::{Result, StorefrontError};
use serde::{Deserialize, Serialize};

/// Keys the full-size image viewer responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewerKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl std::str::FromStr for ViewerKey {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ArrowLeft" | "left" => Ok(ViewerKey::ArrowLeft),
            "ArrowRight" | "right" => Ok(ViewerKey::ArrowRight),
            "Escape" | "esc" => Ok(ViewerKey::Escape),
            other => Err(StorefrontError::Cli(format!("Unknown key: {}", other))),
        }
    }
}

/// Product and image currently shown at full size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerPosition {
    pub product_id: ProductId,
    pub index: usize,
}

/// Full-size image viewer, closed until a product image is opened
#[derive(Debug, Clone, Default)]
pub struct ImageViewer {
    current: Option<ViewerPosition>,
}

impl ImageViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, catalog: &Catalog, product_id: ProductId, index: usize) -> Result<ViewerPosition> {
        check_index(catalog, product_id, index)?;
        let position = ViewerPosition { product_id, index };
        self.current = Some(position);
        Ok(position)
    }

    /// Step through the open product's images with wrap-around; `None` when closed
    pub fn step(&mut self, catalog: &Catalog, direction: Direction) -> Result<Option<ViewerPosition>> {
        let Some(position) = self.current else {
            return Ok(None);
        };
        let product = catalog.find_by_id(position.product_id)?;
        let next = ViewerPosition {
            product_id: position.product_id,
            index: direction.step(position.index, product.image_count()),
        };
        self.current = Some(next);
        Ok(Some(next))
    }

    /// Jump to an image of the open product; returns whether the index changed
    pub fn go_to(&mut self, catalog: &Catalog, index: usize) -> Result<bool> {
        let Some(position) = self.current else {
            return Ok(false);
        };
        if position.index == index {
            return Ok(false);
        }
        check_index(catalog, position.product_id, index)?;
        self.current = Some(ViewerPosition { index, ..position });
        Ok(true)
    }

    pub fn close(&mut self) -> Option<ViewerPosition> {
        self.current.take()
    }

    /// Apply a key press; returns whether the viewer state changed
    pub fn handle_key(&mut self, catalog: &Catalog, key: ViewerKey) -> Result<bool> {
        match key {
            ViewerKey::ArrowLeft => Ok(self.step(catalog, Direction::Previous)?.is_some()),
            ViewerKey::ArrowRight => Ok(self.step(catalog, Direction::Next)?.is_some()),
            ViewerKey::Escape => Ok(self.close().is_some()),
        }
    }

    pub fn current(&self) -> Option<ViewerPosition> {
        self.current
    }
}

fn check_index(catalog: &Catalog, product_id: ProductId, index: usize) -> Result<()> {
    let len = catalog.find_by_id(product_id)?.image_count();
    if index >= len {
        return Err(StorefrontError::ImageOutOfRange {
            product_id,
            index,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Price, Product};

    fn catalog() -> Catalog {
        Catalog::new(vec![Product::new(
            4,
            "Blazer",
            "Outerwear",
            Price::from_cents(8900),
            vec!["front.jpg".into(), "side.jpg".into(), "back.jpg".into()],
        )])
        .unwrap()
    }

    #[test]
    fn test_open_and_navigate() {
        let catalog = catalog();
        let mut viewer = ImageViewer::new();
        assert_eq!(viewer.step(&catalog, Direction::Next).unwrap(), None);

        viewer.open(&catalog, ProductId(4), 0).unwrap();
        assert!(viewer.handle_key(&catalog, ViewerKey::ArrowLeft).unwrap());
        assert_eq!(viewer.current().unwrap().index, 2);
        assert!(viewer.handle_key(&catalog, ViewerKey::ArrowRight).unwrap());
        assert_eq!(viewer.current().unwrap().index, 0);

        assert!(viewer.handle_key(&catalog, ViewerKey::Escape).unwrap());
        assert_eq!(viewer.current(), None);
        assert!(!viewer.handle_key(&catalog, ViewerKey::Escape).unwrap());
    }

    #[test]
    fn test_go_to_same_index_is_noop() {
        let catalog = catalog();
        let mut viewer = ImageViewer::new();
        viewer.open(&catalog, ProductId(4), 1).unwrap();
        assert!(!viewer.go_to(&catalog, 1).unwrap());
        assert!(viewer.go_to(&catalog, 2).unwrap());
        assert!(matches!(
            viewer.go_to(&catalog, 3),
            Err(StorefrontError::ImageOutOfRange { index: 3, len: 3, .. })
        ));
        assert_eq!(viewer.current().unwrap().index, 2);
    }

    #[test]
    fn test_open_rejects_bad_index_and_product() {
        let catalog = catalog();
        let mut viewer = ImageViewer::new();
        assert!(viewer.open(&catalog, ProductId(4), 3).is_err());
        assert!(matches!(
            viewer.open(&catalog, ProductId(5), 0),
            Err(StorefrontError::UnknownProduct(_))
        ));
        assert_eq!(viewer.current(), None);
    }
}
