//! # Pricing Module
//!
//! Derives the order quote (subtotal, delivery fee, discount, total) from a
//! cart and the current promo state.
//!
//! ## Quote Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Quote Derivation                                  │
//! │                                                                         │
//! │   Cart lines                                                            │
//! │   ──────────                                                            │
//! │   Σ (unit_price × quantity) ──────────────► subtotal                    │
//! │                                                                         │
//! │   Flat rate (every order) ────────────────► delivery_fee = $3.99        │
//! │                                                                         │
//! │   PromoState (see promo module) ──────────► discount                    │
//! │                                                                         │
//! │   subtotal + delivery_fee − discount ─────► total                       │
//! │                                                                         │
//! │   NOTE: the total is NOT clamped at zero. A discount larger than        │
//! │   subtotal + delivery_fee produces a negative total; rejecting such     │
//! │   rule configurations is a rule-authoring concern, not a pricing one.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A quote is a pure derivation: it holds no state of its own and is
//! recomputed from scratch on every cart or promo change.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;
use crate::promo::PromoState;

// =============================================================================
// Delivery Fee
// =============================================================================

/// The flat delivery fee charged on every order.
///
/// Applied regardless of cart size or subtotal. There is no free-delivery
/// threshold.
#[inline]
pub fn delivery_fee() -> Money {
    Money::from_major_minor(3, 99)
}

// =============================================================================
// Quote
// =============================================================================

/// A complete price breakdown for the current cart.
///
/// All four components are carried separately so the checkout screen can
/// render each row, and so the order snapshot preserves the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Sum of line totals across the cart.
    pub subtotal: Money,

    /// Flat delivery fee.
    pub delivery_fee: Money,

    /// Discount from the currently applied promo (zero when none).
    pub discount: Money,

    /// `subtotal + delivery_fee - discount`. Not clamped at zero.
    pub total: Money,
}

/// Derives a quote from the cart and the current promo state.
///
/// ## Example
/// ```rust
/// use tasty_core::cart::Cart;
/// use tasty_core::pricing::quote;
/// use tasty_core::promo::PromoState;
///
/// let cart = Cart::new();
/// let q = quote(&cart, &PromoState::Unapplied);
/// // Empty cart still carries the flat delivery fee
/// assert_eq!(q.total, tasty_core::Money::from_major_minor(3, 99));
/// ```
pub fn quote(cart: &Cart, promo: &PromoState) -> Quote {
    let subtotal = cart.subtotal();
    let fee = delivery_fee();
    let discount = promo.discount();

    Quote {
        subtotal,
        delivery_fee: fee,
        discount,
        total: subtotal + fee - discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
