//! # View Types
//!
//! Serializable snapshots handed to the presentation layer.
//!
//! Views are plain data: computed once under the session lock, then owned
//! by the caller. Nothing here references live state.

use serde::Serialize;

use tasty_core::{CartLine, Money, PromoState, Quote};

/// Snapshot of the cart and its quote for rendering the cart screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Cart lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Number of distinct lines.
    pub line_count: usize,

    /// Total quantity across all lines (for the cart badge).
    pub total_quantity: i64,

    /// Price breakdown for the current cart and promo.
    pub quote: Quote,

    /// Current promo state (drives the promo input field).
    pub promo: PromoState,
}

/// Receipt returned from order submission.
///
/// ## The `persisted` Flag
/// When the order store is unreachable the storefront still hands the
/// customer a receipt so the demo flow completes, but with a synthetic
/// `demo-` order id and `persisted: false`. Callers that care (a real
/// deployment would) can tell the two apart; callers that don't can
/// ignore the flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Order id: a UUID when persisted, a `demo-` id otherwise.
    pub order_id: String,

    /// The charged total (may be negative, see pricing).
    pub total: Money,

    /// Whether the order actually reached the order store.
    pub persisted: bool,
}
