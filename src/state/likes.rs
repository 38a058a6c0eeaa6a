use crate::catalog::{Catalog, ProductId};
use crate::Result;
use tracing::debug;

/// Flip the liked flag on a catalog product and return the new value
pub fn toggle(catalog: &mut Catalog, product_id: ProductId) -> Result<bool> {
    let liked = !catalog.find_by_id(product_id)?.liked;
    catalog.set_liked(product_id, liked)?;
    debug!(product_id = %product_id, liked, "Like toggled");
    Ok(liked)
}

/// Products currently marked as liked, in catalog order
pub fn liked_ids(catalog: &Catalog) -> Vec<ProductId> {
    catalog.iter().filter(|p| p.liked).map(|p| p.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Price, Product};
    use crate::StorefrontError;

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut catalog = Catalog::new(vec![Product::new(
            1,
            "Scarf",
            "Accessories",
            Price::from_cents(900),
            vec!["scarf.jpg".into()],
        )])
        .unwrap();

        assert!(toggle(&mut catalog, ProductId(1)).unwrap());
        assert_eq!(liked_ids(&catalog), vec![ProductId(1)]);
        assert!(!toggle(&mut catalog, ProductId(1)).unwrap());
        assert!(liked_ids(&catalog).is_empty());
    }

    #[test]
    fn test_toggle_unknown_fails() {
        let mut catalog = Catalog::default();
        assert!(matches!(
            toggle(&mut catalog, ProductId(3)),
            Err(StorefrontError::UnknownProduct(_))
        ));
    }
}
