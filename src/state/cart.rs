//! Shopping cart line items.
//!
//! Every stored line item has a quantity of at least one and there is at most
//! one line item per product. A line item keeps a snapshot of the product's
//! display fields taken when it was first added. Line totals and the subtotal
//! are priced on every change, and a change whose totals would not fit in a
//! [`Price`] is rejected before the cart is touched.

use crate::catalog::{Catalog, Price, Product, ProductId};
use crate::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Product display fields captured at add time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub image: String,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            image: product.first_image().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    product: ProductSnapshot,
    quantity: u32,
    line_total: Price,
}

impl CartLineItem {
    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity
    pub fn line_total(&self) -> Price {
        self.line_total
    }
}

/// Outcome of a quantity adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// No line item for the product, nothing changed
    NotInCart,
    Updated(u32),
    /// Quantity dropped to zero or below and the line item was removed
    Removed,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
    subtotal: Price,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a catalog product, merging into an existing line item
    pub fn add(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<&CartLineItem> {
        if quantity == 0 {
            return Err(StorefrontError::InvalidQuantity(quantity));
        }
        let product = catalog.find_by_id(product_id)?;

        let position = match self.position(product_id) {
            Some(position) => {
                let current = &self.items[position];
                let quantity = current
                    .quantity
                    .checked_add(quantity)
                    .ok_or(StorefrontError::QuantityOverflow(product_id))?;
                let (item, subtotal) =
                    self.priced_line(current.product.clone(), quantity, Some(position))?;
                self.items[position] = item;
                self.subtotal = subtotal;
                position
            }
            None => {
                let (item, subtotal) =
                    self.priced_line(ProductSnapshot::from(product), quantity, None)?;
                self.items.push(item);
                self.subtotal = subtotal;
                self.items.len() - 1
            }
        };

        let item = &self.items[position];
        debug!(product_id = %product_id, quantity = item.quantity, "Cart item added");
        Ok(item)
    }

    /// Remove the line item for `product_id`; absent items are not an error
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLineItem> {
        let position = self.position(product_id)?;
        debug!(product_id = %product_id, "Cart item removed");
        Some(self.take(position))
    }

    /// Adjust a line item's quantity by `delta`, removing it when it reaches zero
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<QuantityChange> {
        let Some(position) = self.position(product_id) else {
            return Ok(QuantityChange::NotInCart);
        };

        let current = i64::from(self.items[position].quantity);
        let next = current
            .checked_add(delta)
            .ok_or(StorefrontError::QuantityOverflow(product_id))?;

        if next <= 0 {
            self.take(position);
            debug!(product_id = %product_id, "Cart item removed after quantity change");
            return Ok(QuantityChange::Removed);
        }

        let quantity =
            u32::try_from(next).map_err(|_| StorefrontError::QuantityOverflow(product_id))?;
        let snapshot = self.items[position].product.clone();
        let (item, subtotal) = self.priced_line(snapshot, quantity, Some(position))?;
        self.items[position] = item;
        self.subtotal = subtotal;
        debug!(product_id = %product_id, quantity, "Cart quantity updated");
        Ok(QuantityChange::Updated(quantity))
    }

    /// Sum of all quantities
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price times quantity over all line items
    pub fn subtotal(&self) -> Price {
        self.subtotal
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Line items in the order they were first added
    pub fn lines(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price `quantity` of `product` and the subtotal the cart would have with
    /// that line in place of the one at `replacing`
    fn priced_line(
        &self,
        product: ProductSnapshot,
        quantity: u32,
        replacing: Option<usize>,
    ) -> Result<(CartLineItem, Price)> {
        let line_total = product
            .price
            .times(quantity)
            .ok_or(StorefrontError::PriceOverflow(product.id))?;
        let others = match replacing {
            Some(position) => self.subtotal.saturating_sub(self.items[position].line_total),
            None => self.subtotal,
        };
        let subtotal = others
            .checked_add(line_total)
            .ok_or(StorefrontError::PriceOverflow(product.id))?;
        let item = CartLineItem {
            product,
            quantity,
            line_total,
        };
        Ok((item, subtotal))
    }

    fn take(&mut self, position: usize) -> CartLineItem {
        let item = self.items.remove(position);
        self.subtotal = self.subtotal.saturating_sub(item.line_total);
        item
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.id == product_id)
    }
}
