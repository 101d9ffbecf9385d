//! # Domain Types
//!
//! Core domain types used throughout the Tasty Delights storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │    MenuItem     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (doc id)    │   │  id (doc id)    │   │  id (UUID)      │       │
//! │  │  name           │   │  name           │   │  subtotal       │       │
//! │  │  image          │   │  price          │   │  delivery_fee   │       │
//! │  └─────────────────┘   │  category_id    │   │  discount       │       │
//! │                        └─────────────────┘   │  total, status  │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  Category and MenuItem are catalog documents: externally assigned      │
//! │  identifiers, immutable from the client's perspective.                 │
//! │  Order and OrderLine are write-once snapshots owned by the backend     │
//! │  after submission.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A menu category document (e.g. "Pizza", "Burgers", "Sushi").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Opaque document identifier, assigned by the catalog store.
    pub id: String,

    /// Display name shown on the home screen.
    pub name: String,

    /// Image URL for the category tile.
    pub image: Option<String>,
}

// =============================================================================
// Menu Item
// =============================================================================

/// A menu item document available for ordering.
///
/// Sourced read-only from the catalog; the client never mutates these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Opaque document identifier, assigned by the catalog store.
    pub id: String,

    /// Display name shown on the menu and receipt.
    pub name: String,

    /// Optional longer description for the menu card.
    pub description: Option<String>,

    /// Unit price (non-negative decimal).
    pub price: Money,

    /// Image URL for the menu card.
    pub image: Option<String>,

    /// Category this item belongs to, if any.
    pub category_id: Option<String>,
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a submitted order.
///
/// The client only ever creates orders in `Pending`; later transitions are
/// owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order has been submitted and awaits fulfilment.
    #[default]
    Pending,
    /// Order has been fulfilled.
    Completed,
    /// Order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Stable string form used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A submitted order record.
///
/// Snapshot of the cart and its quote at submission time. Never mutated by
/// the client after creation; owned thereafter by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub discount: Money,
    pub total: Money,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Order Line
// =============================================================================

/// A line item in an order.
/// Uses the snapshot pattern to freeze menu item data at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub order_id: String,
    /// Catalog document id of the ordered item.
    pub item_id: String,
    /// Item name at time of submission (frozen).
    pub name: String,
    /// Unit price at time of submission (frozen).
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: i64,
    /// Line total (unit_price × quantity).
    pub line_total: Money,
}

impl OrderLine {
    /// Recomputes the line total from unit price and quantity.
    #[inline]
    pub fn computed_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("unknown".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_line_computed_total() {
        let line = OrderLine {
            id: "l1".to_string(),
            order_id: "o1".to_string(),
            item_id: "pizza-1".to_string(),
            name: "Margherita Pizza".to_string(),
            unit_price: Money::from_major_minor(12, 99),
            quantity: 2,
            line_total: Money::from_major_minor(25, 98),
        };
        assert_eq!(line.computed_total(), line.line_total);
    }
}
