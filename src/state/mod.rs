pub mod carousel;
pub mod cart;
pub mod events;
pub mod filter;
pub mod likes;
pub mod storefront;
pub mod viewer;

pub use carousel::{CarouselTracker, Direction};
pub use cart::{Cart, CartLineItem, ProductSnapshot, QuantityChange};
pub use events::{StorefrontEntry, StorefrontEvent};
pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use storefront::{CartSummary, CheckoutOutcome, Storefront};
pub use viewer::{ImageViewer, ViewerKey, ViewerPosition};
