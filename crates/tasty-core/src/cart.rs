//! # Cart Module
//!
//! The session shopping cart and its mutation rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  UI Action                 Operation               Cart Change          │
//! │  ─────────                 ─────────               ───────────          │
//! │                                                                         │
//! │  Tap item on menu ───────► add_item() ───────────► merge or push line   │
//! │                                                                         │
//! │  Tap +/- stepper ────────► change_quantity() ────► qty += delta         │
//! │                                                    (< 1 removes line)   │
//! │                                                                         │
//! │  Tap trash icon ─────────► remove_item() ────────► line deleted         │
//! │                                                                         │
//! │  Order submitted ────────► clear() ──────────────► cart emptied         │
//! │                                                                         │
//! │  Render badge ───────────► quantity_of() ────────► (read only)          │
//! │                                                                         │
//! │  INVARIANT: at most one line per menu item id.                          │
//! │  INVARIANT: every line has quantity >= 1 (no zero-quantity lines).      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is a plain owned value; thread-safe sharing (`Arc<Mutex<Cart>>`)
//! is layered on in `tasty-session`, keeping this module purely synchronous
//! and fully testable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct menu item's entry in the cart.
///
/// ## Design Notes
/// - `item_id`: reference to the catalog document
/// - name/price/image are frozen copies taken when the item is added, so
///   the cart renders consistently even if the catalog changes underneath
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog document id of the menu item.
    pub item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Image URL at time of adding (frozen).
    pub image: Option<String>,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// When this line was first added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a menu item and quantity.
    fn from_item(item: &MenuItem, quantity: i64) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The session shopping cart.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item merges quantities)
/// - Every line has quantity >= 1 (a change driving quantity below 1
///   removes the line entirely)
///
/// Lines are kept private: all mutation goes through the methods below, so
/// the invariants cannot be violated from outside this module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a menu item to the cart, or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Item already in cart: its quantity increases by `quantity`
    /// - Item not in cart: a new line is pushed with `quantity`
    /// - No upper bound is enforced on quantities or line count
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] if `quantity < 1`
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        if quantity < 1 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            line.quantity += quantity;
            return Ok(());
        }

        self.lines.push(CartLine::from_item(item, quantity));
        Ok(())
    }

    /// Adjusts a line's quantity by a signed delta.
    ///
    /// ## Behavior
    /// - Resulting quantity >= 1: the line keeps the new quantity
    /// - Resulting quantity < 1: the line is removed entirely
    ///
    /// ## Errors
    /// - [`CoreError::LineNotFound`] if no line exists for `item_id`
    pub fn change_quantity(&mut self, item_id: &str, delta: i64) -> CoreResult<()> {
        let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) else {
            return Err(CoreError::LineNotFound(item_id.to_string()));
        };

        let new_quantity = line.quantity + delta;
        if new_quantity < 1 {
            self.lines.retain(|l| l.item_id != item_id);
        } else {
            line.quantity = new_quantity;
        }

        Ok(())
    }

    /// Removes a line from the cart by item id. No-op if absent.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Clears all lines from the cart. Used after order submission.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the quantity for a menu item, or 0 if it is not in the cart.
    pub fn quantity_of(&self, item_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal (sum of line totals).
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(id: &str, major: i64, minor: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: None,
            price: Money::from_major_minor(major, minor),
            image: None,
            category_id: None,
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let item = test_item("1", 9, 99);

        cart.add_item(&item, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_major_minor(19, 98));
    }

    #[test]
    fn test_add_same_item_merges_into_one_line() {
        let mut cart = Cart::new();
        let item = test_item("1", 9, 99);

        cart.add_item(&item, 2).unwrap();
        cart.add_item(&item, 3).unwrap();

        // Still one distinct line - the uniqueness invariant
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("1"), 5);
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let mut cart = Cart::new();
        let item = test_item("1", 9, 99);

        assert!(matches!(
            cart.add_item(&item, 0),
            Err(CoreError::InvalidQuantity { requested: 0 })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_adjusts_by_delta() {
        let mut cart = Cart::new();
        let item = test_item("1", 9, 99);

        cart.add_item(&item, 1).unwrap();
        cart.change_quantity("1", 2).unwrap();
        assert_eq!(cart.quantity_of("1"), 3);

        cart.change_quantity("1", -1).unwrap();
        assert_eq!(cart.quantity_of("1"), 2);
    }

    #[test]
    fn test_change_quantity_below_one_removes_line() {
        let mut cart = Cart::new();
        let item = test_item("1", 9, 99);

        cart.add_item(&item, 1).unwrap();
        cart.change_quantity("1", -1).unwrap();

        // No zero-quantity line may survive
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("1"), 0);
    }

    #[test]
    fn test_change_quantity_unknown_item_errors() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.change_quantity("ghost", 1),
            Err(CoreError::LineNotFound(_))
        ));
    }

    #[test]
    fn test_remove_item_is_noop_when_absent() {
        let mut cart = Cart::new();
        let item = test_item("1", 9, 99);
        cart.add_item(&item, 1).unwrap();

        cart.remove_item("ghost");
        assert_eq!(cart.line_count(), 1);

        cart.remove_item("1");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_is_order_independent() {
        let a = test_item("a", 12, 99);
        let b = test_item("b", 3, 50);
        let c = test_item("c", 0, 75);

        let mut cart1 = Cart::new();
        cart1.add_item(&a, 2).unwrap();
        cart1.add_item(&b, 1).unwrap();
        cart1.add_item(&c, 4).unwrap();

        let mut cart2 = Cart::new();
        cart2.add_item(&c, 4).unwrap();
        cart2.add_item(&a, 1).unwrap();
        cart2.add_item(&b, 1).unwrap();
        cart2.add_item(&a, 1).unwrap();

        assert_eq!(cart1.subtotal(), cart2.subtotal());
        assert_eq!(cart1.subtotal(), Money::from_major_minor(32, 48));
    }

    /// Uniqueness invariant holds under arbitrary op sequences.
    #[test]
    fn test_no_duplicate_lines_under_mixed_ops() {
        let mut cart = Cart::new();
        let item = test_item("1", 5, 0);

        cart.add_item(&item, 1).unwrap();
        cart.change_quantity("1", 3).unwrap();
        cart.remove_item("1");
        cart.add_item(&item, 2).unwrap();
        cart.add_item(&item, 2).unwrap();
        cart.change_quantity("1", -3).unwrap();

        let ids: Vec<_> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
        assert_eq!(cart.quantity_of("1"), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_item("1", 9, 99), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_line_snapshot_freezes_price() {
        let mut cart = Cart::new();
        let mut item = test_item("1", 9, 99);
        cart.add_item(&item, 1).unwrap();

        // Catalog price changes after the item was added
        item.price = Money::from_major_minor(19, 99);

        assert_eq!(cart.subtotal(), Money::from_major_minor(9, 99));
    }
}
