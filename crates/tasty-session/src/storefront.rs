//! # Storefront Facade
//!
//! The operations the presentation layer invokes, one method per screen
//! action.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Operations                              │
//! │                                                                         │
//! │  Screen            Method                    Failure Behavior           │
//! │  ──────            ──────                    ────────────────           │
//! │  Home              browse_categories()       degrade: empty list        │
//! │  Menu              browse_menu(category)     degrade: empty list        │
//! │  Menu card         add_to_cart(id, qty)      error: item/qty invalid    │
//! │  Cart stepper      change_quantity(id, ±d)   error: line missing        │
//! │  Cart trash        remove_from_cart(id)      never fails                │
//! │  Cart render       cart()                    never fails                │
//! │  Promo input       apply_promo(code)         outcome, never an error    │
//! │  Checkout          place_order()             error ONLY on empty cart;  │
//! │                                              store outage degrades to   │
//! │                                              an unpersisted receipt     │
//! │                                                                         │
//! │  Degrade, don't die: a hungry customer staring at an error screen       │
//! │  orders nothing. Catalog outages show an empty menu; order-store        │
//! │  outages still complete checkout with a demo receipt.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use tasty_core::{
    pricing, Cart, Category, CoreError, MenuItem, Order, OrderLine, OrderStatus, PromoOutcome,
    Quote,
};
use tasty_db::{generate_line_id, generate_order_id, Database};

use crate::config::SessionConfig;
use crate::error::ApiError;
use crate::state::{Session, SessionState};
use crate::views::{CartView, OrderReceipt};

/// The storefront: one customer's shopping session over the shared catalog
/// and order store.
#[derive(Debug, Clone)]
pub struct Storefront {
    db: Database,
    state: SessionState,
    config: SessionConfig,
}

impl Storefront {
    /// Creates a storefront over an already-connected database.
    pub fn new(db: Database, config: SessionConfig) -> Self {
        info!(store = %config.store_name, "Storefront session started");
        Storefront {
            db,
            state: SessionState::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    // =========================================================================
    // Catalog Browsing
    // =========================================================================

    /// Lists the menu categories for the home screen.
    ///
    /// Degrades to an empty list if the catalog store is unreachable.
    pub async fn browse_categories(&self) -> Vec<Category> {
        match self.db.catalog().list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "Catalog unavailable, showing empty category list");
                Vec::new()
            }
        }
    }

    /// Lists menu items, optionally filtered to one category.
    ///
    /// Degrades to an empty list if the catalog store is unreachable.
    pub async fn browse_menu(&self, category_id: Option<&str>) -> Vec<MenuItem> {
        match self.db.catalog().list_menu_items(category_id).await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Catalog unavailable, showing empty menu");
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds a menu item to the cart by its catalog id.
    ///
    /// ## Errors
    /// - `NOT_FOUND` if the item is not in the catalog (or the catalog is
    ///   unreachable - an item we cannot price cannot be added)
    /// - `VALIDATION_ERROR` if `quantity < 1`
    pub async fn add_to_cart(&self, item_id: &str, quantity: i64) -> Result<CartView, ApiError> {
        let item = self
            .db
            .catalog()
            .get_menu_item(item_id)
            .await?
            .ok_or_else(|| ApiError::not_found("MenuItem", item_id))?;

        debug!(item = %item.name, quantity, "Adding to cart");

        self.state.with_session_mut(|s| {
            s.cart.add_item(&item, quantity)?;
            Ok::<_, CoreError>(cart_view(s))
        })
        .map_err(ApiError::from)
    }

    /// Adjusts a cart line's quantity by a signed delta.
    ///
    /// A resulting quantity below 1 removes the line.
    pub fn change_quantity(&self, item_id: &str, delta: i64) -> Result<CartView, ApiError> {
        self.state.with_session_mut(|s| {
            s.cart.change_quantity(item_id, delta)?;
            Ok::<_, CoreError>(cart_view(s))
        })
        .map_err(ApiError::from)
    }

    /// Removes a line from the cart. No-op if the line is absent.
    pub fn remove_from_cart(&self, item_id: &str) -> CartView {
        self.state.with_session_mut(|s| {
            s.cart.remove_item(item_id);
            cart_view(s)
        })
    }

    /// Clears the cart and resets the promo.
    pub fn clear_cart(&self) -> CartView {
        self.state.with_session_mut(|s| {
            s.cart.clear();
            s.promo.reset();
            cart_view(s)
        })
    }

    /// Returns the current cart snapshot.
    pub fn cart(&self) -> CartView {
        self.state.with_session(cart_view)
    }

    /// Returns the quantity of one item in the cart (for the menu badge).
    pub fn quantity_of(&self, item_id: &str) -> i64 {
        self.state.with_session(|s| s.cart.quantity_of(item_id))
    }

    // =========================================================================
    // Promo
    // =========================================================================

    /// Attempts to apply a promo code against the current subtotal.
    ///
    /// Returns the outcome with its user-facing message; an unknown code is
    /// not an error. Either way the previous promo state is replaced.
    pub fn apply_promo(&self, code: &str) -> PromoOutcome {
        self.state.with_session_mut(|s| {
            let subtotal = s.cart.subtotal();
            let outcome = s.promo.apply(code, subtotal);
            match &outcome {
                PromoOutcome::Applied { discount, .. } => {
                    info!(code = %code.trim(), discount = %discount, "Promo applied");
                }
                PromoOutcome::Rejected { .. } => {
                    debug!(code = %code.trim(), "Promo rejected");
                }
            }
            outcome
        })
    }

    // =========================================================================
    // Order Submission
    // =========================================================================

    /// Submits the current cart as an order.
    ///
    /// ## Behavior
    /// - Empty cart: `VALIDATION_ERROR`, session untouched
    /// - Otherwise the cart and quote are snapshotted into an order with
    ///   status `pending` and written atomically
    /// - If the write fails the customer still gets a receipt, with a
    ///   synthetic `demo-` order id and `persisted: false`
    /// - Once submission is attempted the cart is cleared and the promo
    ///   reset, whatever the persistence outcome
    pub async fn place_order(&self) -> Result<OrderReceipt, ApiError> {
        // Snapshot under the lock; nothing changes yet.
        let snapshot = self.state.with_session(|s| {
            if s.cart.is_empty() {
                None
            } else {
                Some((s.cart.clone(), pricing::quote(&s.cart, s.promo.state())))
            }
        });

        let Some((cart, quote)) = snapshot else {
            return Err(CoreError::EmptyCart.into());
        };

        let (order, lines) = order_snapshot(&cart, &quote);

        debug!(
            id = %order.id,
            total = %quote.total,
            line_count = lines.len(),
            "Submitting order"
        );

        let persisted = match self.db.orders().insert_order(&order, &lines).await {
            Ok(()) => {
                info!(id = %order.id, total = %quote.total, "Order persisted");
                true
            }
            Err(e) => {
                warn!(error = %e, "Order store unavailable, issuing demo receipt");
                false
            }
        };

        let order_id = if persisted {
            order.id
        } else {
            fallback_order_id()
        };

        // The cart resets regardless of the persistence outcome: the
        // customer has committed to the order either way.
        self.state.with_session_mut(|s| {
            s.cart.clear();
            s.promo.reset();
        });

        Ok(OrderReceipt {
            order_id,
            total: quote.total,
            persisted,
        })
    }
}

/// Builds the serializable cart view from the live session.
fn cart_view(session: &Session) -> CartView {
    let quote = pricing::quote(&session.cart, session.promo.state());
    CartView {
        lines: session.cart.lines().to_vec(),
        line_count: session.cart.line_count(),
        total_quantity: session.cart.total_quantity(),
        quote,
        promo: session.promo.state().clone(),
    }
}

/// Freezes the cart and quote into an order header plus line snapshots.
fn order_snapshot(cart: &Cart, quote: &Quote) -> (Order, Vec<OrderLine>) {
    let order_id = generate_order_id();

    let order = Order {
        id: order_id.clone(),
        subtotal: quote.subtotal,
        delivery_fee: quote.delivery_fee,
        discount: quote.discount,
        total: quote.total,
        status: OrderStatus::Pending,
        placed_at: Utc::now(),
    };

    let lines = cart
        .lines()
        .iter()
        .map(|line| OrderLine {
            id: generate_line_id(),
            order_id: order_id.clone(),
            item_id: line.item_id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total(),
        })
        .collect();

    (order, lines)
}

/// Synthesizes a receipt id for orders that never reached the store.
fn fallback_order_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("demo-{}", &uuid[..6])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tasty_core::{Money, PromoState};
    use tasty_db::DbConfig;

    use crate::error::ErrorCode;

    async fn storefront_with_catalog() -> Storefront {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.catalog()
            .insert_category(&Category {
                id: "cat-pizza".to_string(),
                name: "Pizza".to_string(),
                image: None,
            })
            .await
            .unwrap();
        db.catalog()
            .insert_menu_item(&MenuItem {
                id: "pizza-1".to_string(),
                name: "Margherita Pizza".to_string(),
                description: None,
                price: Money::from_major_minor(12, 99),
                image: None,
                category_id: Some("cat-pizza".to_string()),
            })
            .await
            .unwrap();

        Storefront::new(db, SessionConfig::default())
    }

    #[tokio::test]
    async fn test_browse_and_add() {
        let store = storefront_with_catalog().await;

        let categories = store.browse_categories().await;
        assert_eq!(categories.len(), 1);

        let menu = store.browse_menu(Some("cat-pizza")).await;
        assert_eq!(menu.len(), 1);

        let view = store.add_to_cart("pizza-1", 2).await.unwrap();
        assert_eq!(view.total_quantity, 2);
        assert_eq!(view.quote.subtotal, Money::from_major_minor(25, 98));
        assert_eq!(view.quote.total, Money::from_major_minor(29, 97));
    }

    #[tokio::test]
    async fn test_add_unknown_item_is_not_found() {
        let store = storefront_with_catalog().await;

        let err = store.add_to_cart("ghost", 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(store.cart().lines.is_empty());
    }

    #[tokio::test]
    async fn test_stepper_and_remove() {
        let store = storefront_with_catalog().await;
        store.add_to_cart("pizza-1", 1).await.unwrap();

        let view = store.change_quantity("pizza-1", 2).unwrap();
        assert_eq!(view.total_quantity, 3);

        // Driving the quantity below 1 removes the line
        let view = store.change_quantity("pizza-1", -3).unwrap();
        assert!(view.lines.is_empty());

        // Removing an absent line is a no-op
        let view = store.remove_from_cart("pizza-1");
        assert!(view.lines.is_empty());
    }

    #[tokio::test]
    async fn test_promo_applies_to_quote() {
        let store = storefront_with_catalog().await;
        store.add_to_cart("pizza-1", 2).await.unwrap();

        let outcome = store.apply_promo("vijay");
        assert!(matches!(outcome, PromoOutcome::Applied { .. }));

        let view = store.cart();
        assert_eq!(view.quote.discount, Money::new(Decimal::new(6495, 3)));
        assert_eq!(view.quote.total, Money::new(Decimal::new(23475, 3)));
    }

    #[tokio::test]
    async fn test_bad_promo_wipes_discount() {
        let store = storefront_with_catalog().await;
        store.add_to_cart("pizza-1", 2).await.unwrap();
        store.apply_promo("VIJAY");

        let outcome = store.apply_promo("SAVE10");
        assert!(matches!(outcome, PromoOutcome::Rejected { .. }));

        let view = store.cart();
        assert_eq!(view.quote.discount, Money::zero());
        assert_eq!(view.quote.total, Money::from_major_minor(29, 97));
    }

    #[tokio::test]
    async fn test_place_order_empty_cart_rejected() {
        let store = storefront_with_catalog().await;

        let err = store.place_order().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Cart is empty");

        // Session untouched
        assert_eq!(store.db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_place_order_persists_snapshot() {
        let store = storefront_with_catalog().await;
        store.add_to_cart("pizza-1", 2).await.unwrap();
        store.apply_promo("VIJAY");

        let receipt = store.place_order().await.unwrap();
        assert!(receipt.persisted);
        assert!(!receipt.order_id.starts_with("demo-"));
        assert_eq!(receipt.total, Money::new(Decimal::new(23475, 3)));

        // Order landed with its breakdown intact
        let order = store
            .db
            .orders()
            .get_by_id(&receipt.order_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal, Money::from_major_minor(25, 98));
        assert_eq!(order.discount, Money::new(Decimal::new(6495, 3)));

        let lines = store.db.orders().get_lines(&receipt.order_id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Margherita Pizza");
        assert_eq!(lines[0].quantity, 2);

        // Cart cleared and promo reset for the next order
        let view = store.cart();
        assert!(view.lines.is_empty());
        assert_eq!(view.promo, PromoState::Unapplied);
        assert_eq!(view.quote.discount, Money::zero());
    }

    #[tokio::test]
    async fn test_place_order_degrades_when_store_is_down() {
        let store = storefront_with_catalog().await;
        store.add_to_cart("pizza-1", 2).await.unwrap();

        // Simulate the order store going away mid-session
        store.db.close().await;

        let receipt = store.place_order().await.unwrap();
        assert!(!receipt.persisted);
        assert!(receipt.order_id.starts_with("demo-"));
        assert_eq!(receipt.total, Money::from_major_minor(29, 97));

        // The cart still resets: the customer committed to the order
        assert!(store.cart().lines.is_empty());
    }

    #[tokio::test]
    async fn test_browse_degrades_when_catalog_is_down() {
        let store = storefront_with_catalog().await;
        store.db.close().await;

        assert!(store.browse_categories().await.is_empty());
        assert!(store.browse_menu(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_cart_resets_promo() {
        let store = storefront_with_catalog().await;
        store.add_to_cart("pizza-1", 2).await.unwrap();
        store.apply_promo("VIJAY");

        let view = store.clear_cart();
        assert!(view.lines.is_empty());
        assert_eq!(view.promo, PromoState::Unapplied);
    }

    #[test]
    fn test_fallback_order_id_shape() {
        let id = fallback_order_id();
        assert!(id.starts_with("demo-"));
        assert_eq!(id.len(), "demo-".len() + 6);
    }
}
