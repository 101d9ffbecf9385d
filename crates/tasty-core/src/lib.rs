//! # tasty-core: Pure Business Logic for Tasty Delights
//!
//! This crate is the **heart** of the Tasty Delights storefront. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Tasty Delights Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (out of scope)              │   │
//! │  │    Home (categories) ──► Menu ──► Cart ──► Confirmation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tasty-session (Storefront)                   │   │
//! │  │    browse, add_to_cart, apply_promo, place_order, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tasty-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │   promo   │  │   │
//! │  │   │ MenuItem  │  │   Money   │  │   Cart    │  │  rule     │  │   │
//! │  │   │  Order    │  │ decimals  │  │ CartLine  │  │  table    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tasty-db (Database Layer)                    │   │
//! │  │          Catalog and order repositories over SQLite             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, MenuItem, Order, etc.)
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`cart`] - The session cart and its mutation rules
//! - [`pricing`] - Quote derivation (subtotal, delivery fee, total)
//! - [`promo`] - Promo code rule table and state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values use exact decimal arithmetic
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tasty_core::money::Money;
//!
//! // Catalog price, e.g. $12.99
//! let price = Money::from_major_minor(12, 99);
//!
//! // 25% promo discount on a $25.98 subtotal is exactly $6.495
//! let subtotal = price * 2i64;
//! let discount = subtotal.percentage(rust_decimal::Decimal::from(25));
//! assert_eq!(discount.amount(), rust_decimal::Decimal::new(6495, 3));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tasty_core::Money` instead of
// `use tasty_core::money::Money`

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{delivery_fee, Quote};
pub use promo::{DiscountRule, PromoEngine, PromoOutcome, PromoRule, PromoState};
pub use types::*;
