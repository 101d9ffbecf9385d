//! # Session State
//!
//! The mutable per-session state: the cart and the promo engine.
//!
//! ## Thread Safety
//! Both live behind one `Arc<Mutex<..>>` because:
//! 1. Applying a promo reads the cart subtotal - the two must not race
//! 2. Order submission snapshots the cart and resets the promo atomically
//! 3. Operations are quick; a Mutex (not RwLock) keeps this simple
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SessionState                                      │
//! │                                                                         │
//! │   Arc<Mutex< Session { cart: Cart, promo: PromoEngine } >>              │
//! │                                                                         │
//! │   with_session(|s| ...)      read access                                │
//! │   with_session_mut(|s| ...)  write access                               │
//! │                                                                         │
//! │   The closures run under the lock: keep them synchronous and short,    │
//! │   never .await inside one.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tasty_core::{Cart, PromoEngine};

/// The state owned by one shopping session.
#[derive(Debug)]
pub struct Session {
    /// The shopping cart.
    pub cart: Cart,

    /// The promo rule table and current promo state.
    pub promo: PromoEngine,
}

impl Session {
    /// Creates a fresh session: empty cart, stock promo rules, nothing applied.
    pub fn new() -> Self {
        Session {
            cart: Cart::new(),
            promo: PromoEngine::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the session state.
///
/// Cheap to clone; all clones refer to the same session.
#[derive(Debug, Clone)]
pub struct SessionState {
    inner: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a new empty session state.
    pub fn new() -> Self {
        SessionState {
            inner: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let subtotal = state.with_session(|s| s.cart.subtotal());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.inner.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_session_mut(|s| s.cart.add_item(&item, 1))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.inner.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasty_core::{MenuItem, Money};

    fn test_item() -> MenuItem {
        MenuItem {
            id: "pizza-1".to_string(),
            name: "Margherita Pizza".to_string(),
            description: None,
            price: Money::from_major_minor(12, 99),
            image: None,
            category_id: None,
        }
    }

    #[test]
    fn test_clones_share_state() {
        let state = SessionState::new();
        let clone = state.clone();

        state
            .with_session_mut(|s| s.cart.add_item(&test_item(), 2))
            .unwrap();

        assert_eq!(
            clone.with_session(|s| s.cart.subtotal()),
            Money::from_major_minor(25, 98)
        );
    }

    #[test]
    fn test_promo_sees_cart_under_same_lock() {
        let state = SessionState::new();
        state
            .with_session_mut(|s| s.cart.add_item(&test_item(), 2))
            .unwrap();

        state.with_session_mut(|s| {
            let subtotal = s.cart.subtotal();
            s.promo.apply("VIJAY", subtotal);
        });

        let discount = state.with_session(|s| s.promo.discount());
        assert_eq!(
            discount,
            Money::new(rust_decimal::Decimal::new(6495, 3))
        );
    }
}
