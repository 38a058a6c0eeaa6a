use super::filter::CategoryFilter;
use super::viewer::ViewerPosition;
use crate::catalog::{Price, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single change notification for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontEntry {
    /// When the change was committed
    pub timestamp: DateTime<Utc>,
    pub event: StorefrontEvent,
}

impl StorefrontEntry {
    pub fn new(event: StorefrontEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

/// State changes the presentation layer re-renders from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorefrontEvent {
    /// Cart contents changed; carries the new derived totals
    CartChanged { item_count: u64, subtotal: Price },
    /// A product was added to the cart (toast notification)
    ItemAdded {
        product_id: ProductId,
        name: String,
        image: String,
    },
    LikeToggled { product_id: ProductId, liked: bool },
    SlideChanged { product_id: ProductId, index: usize },
    FilterApplied {
        filter: CategoryFilter,
        visible: usize,
    },
    DrawerToggled { open: bool },
    /// Full-size viewer moved or closed (`None`)
    ViewerChanged { position: Option<ViewerPosition> },
}

impl StorefrontEvent {
    /// Toast text for events that raise one
    pub fn notification(&self) -> Option<String> {
        match self {
            StorefrontEvent::ItemAdded { name, .. } => {
                Some(format!("{} has been added to your cart.", name))
            }
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StorefrontEvent::CartChanged { .. } => "cart_changed",
            StorefrontEvent::ItemAdded { .. } => "item_added",
            StorefrontEvent::LikeToggled { .. } => "like_toggled",
            StorefrontEvent::SlideChanged { .. } => "slide_changed",
            StorefrontEvent::FilterApplied { .. } => "filter_applied",
            StorefrontEvent::DrawerToggled { .. } => "drawer_toggled",
            StorefrontEvent::ViewerChanged { .. } => "viewer_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_added_notification() {
        let event = StorefrontEvent::ItemAdded {
            product_id: ProductId(1),
            name: "Linen Shirt".to_string(),
            image: "shirt.jpg".to_string(),
        };
        assert_eq!(
            event.notification().as_deref(),
            Some("Linen Shirt has been added to your cart.")
        );
        assert_eq!(StorefrontEvent::DrawerToggled { open: true }.notification(), None);
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let entry = StorefrontEntry::new(StorefrontEvent::LikeToggled {
            product_id: ProductId(3),
            liked: true,
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["event"]["type"], "like_toggled");
        assert_eq!(json["event"]["product_id"], 3);
    }
}
