//! Session state for one storefront page.
//!
//! [`Storefront`] owns the catalog and every piece of per-session state. Each
//! mutation completes before its change event is queued, so callers can query
//! the new state immediately regardless of how the presentation layer animates it.

use super::carousel::{CarouselTracker, Direction};
use super::cart::{Cart, CartLineItem, QuantityChange};
use super::events::{StorefrontEntry, StorefrontEvent};
use super::filter::CategoryFilter;
use super::likes;
use super::viewer::{ImageViewer, ViewerKey, ViewerPosition};
use crate::catalog::{Catalog, Price, Product, ProductId};
use crate::config::types::Settings;
use crate::{Result, StorefrontError};
use serde::Serialize;
use tracing::{debug, info};

/// Derived cart view for rendering the drawer
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub item_count: u64,
    pub subtotal: Price,
    pub lines: Vec<CartLineItem>,
}

/// Result of pressing checkout; no order is placed either way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Ready { item_count: u64, subtotal: Price },
    EmptyCart,
}

impl CheckoutOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CheckoutOutcome::Ready { .. } => "Checkout functionality would be implemented here",
            CheckoutOutcome::EmptyCart => "Please add items to your cart first.",
        }
    }
}

pub struct Storefront {
    catalog: Catalog,
    settings: Settings,
    carousel: CarouselTracker,
    cart: Cart,
    viewer: ImageViewer,
    filter: CategoryFilter,
    cart_open: bool,
    /// Pending change notifications, oldest first
    events: Vec<StorefrontEntry>,
}

impl Storefront {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let carousel = CarouselTracker::for_catalog(&catalog);
        info!(products = catalog.len(), "Storefront session started");
        Self {
            catalog,
            settings,
            carousel,
            cart: Cart::new(),
            viewer: ImageViewer::new(),
            filter: CategoryFilter::All,
            cart_open: false,
            events: Vec::new(),
        }
    }

    /// Return to the freshly loaded state; liked flags belong to the catalog and are kept
    pub fn reset(&mut self) {
        self.carousel = CarouselTracker::for_catalog(&self.catalog);
        self.cart = Cart::new();
        self.viewer = ImageViewer::new();
        self.filter = CategoryFilter::All;
        self.cart_open = false;
        self.events.clear();
        debug!("Storefront session reset");
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn find_product(&self, product_id: ProductId) -> Result<&Product> {
        self.catalog.find_by_id(product_id)
    }

    // Carousel

    pub fn advance_slide(&mut self, product_id: ProductId, direction: Direction) -> Result<usize> {
        let index = self.carousel.advance(&self.catalog, product_id, direction)?;
        self.emit(StorefrontEvent::SlideChanged { product_id, index });
        Ok(index)
    }

    pub fn slide_index(&self, product_id: ProductId) -> Result<usize> {
        self.carousel.get(product_id)
    }

    // Likes

    pub fn toggle_like(&mut self, product_id: ProductId) -> Result<bool> {
        let liked = likes::toggle(&mut self.catalog, product_id)?;
        self.emit(StorefrontEvent::LikeToggled { product_id, liked });
        Ok(liked)
    }

    // Cart

    /// Add to the cart, opening the drawer when configured to
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: u32) -> Result<CartLineItem> {
        let item = self.cart.add(&self.catalog, product_id, quantity)?.clone();

        self.emit(StorefrontEvent::ItemAdded {
            product_id,
            name: item.product().name.clone(),
            image: item.product().image.clone(),
        });
        self.emit_cart_changed();

        if self.settings.open_cart_on_add && !self.cart_open {
            self.toggle_cart();
        }
        Ok(item)
    }

    /// Remove a line item; returns whether one was present
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove(product_id).is_some();
        if removed {
            self.emit_cart_changed();
        }
        removed
    }

    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<QuantityChange> {
        if !self.catalog.contains(product_id) {
            return Err(StorefrontError::UnknownProduct(product_id));
        }
        let change = self.cart.update_quantity(product_id, delta)?;
        if change != QuantityChange::NotInCart {
            self.emit_cart_changed();
        }
        Ok(change)
    }

    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    pub fn subtotal(&self) -> Price {
        self.cart.subtotal()
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn cart_summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.cart.total_item_count(),
            subtotal: self.cart.subtotal(),
            lines: self.cart.lines().to_vec(),
        }
    }

    pub fn toggle_cart(&mut self) -> bool {
        self.cart_open = !self.cart_open;
        self.emit(StorefrontEvent::DrawerToggled {
            open: self.cart_open,
        });
        self.cart_open
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn checkout(&self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            CheckoutOutcome::EmptyCart
        } else {
            CheckoutOutcome::Ready {
                item_count: self.cart.total_item_count(),
                subtotal: self.cart.subtotal(),
            }
        }
    }

    // Filter

    /// Switch the active category and return the visible products
    pub fn apply_filter(&mut self, filter: CategoryFilter) -> Vec<&Product> {
        let visible = filter.apply(&self.catalog).len();
        self.emit(StorefrontEvent::FilterApplied {
            filter: filter.clone(),
            visible,
        });
        self.filter = filter;
        self.visible_products()
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    // Image viewer

    pub fn open_image(&mut self, product_id: ProductId, index: usize) -> Result<ViewerPosition> {
        let position = self.viewer.open(&self.catalog, product_id, index)?;
        self.emit(StorefrontEvent::ViewerChanged {
            position: Some(position),
        });
        Ok(position)
    }

    pub fn viewer_go_to(&mut self, index: usize) -> Result<bool> {
        let changed = self.viewer.go_to(&self.catalog, index)?;
        if changed {
            self.emit_viewer_changed();
        }
        Ok(changed)
    }

    pub fn viewer_key(&mut self, key: ViewerKey) -> Result<bool> {
        let changed = self.viewer.handle_key(&self.catalog, key)?;
        if changed {
            self.emit_viewer_changed();
        }
        Ok(changed)
    }

    pub fn close_image(&mut self) -> bool {
        let closed = self.viewer.close().is_some();
        if closed {
            self.emit_viewer_changed();
        }
        closed
    }

    pub fn viewer_position(&self) -> Option<ViewerPosition> {
        self.viewer.current()
    }

    // Events

    /// Hand pending change notifications to the caller
    pub fn drain_events(&mut self) -> Vec<StorefrontEntry> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: StorefrontEvent) {
        debug!(event = event.name(), "Storefront event");
        self.events.push(StorefrontEntry::new(event));
    }

    fn emit_cart_changed(&mut self) {
        self.emit(StorefrontEvent::CartChanged {
            item_count: self.cart.total_item_count(),
            subtotal: self.cart.subtotal(),
        });
    }

    fn emit_viewer_changed(&mut self) {
        self.emit(StorefrontEvent::ViewerChanged {
            position: self.viewer.current(),
        });
    }
}
