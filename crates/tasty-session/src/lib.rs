//! # tasty-session: Session Layer for Tasty Delights
//!
//! The storefront facade the presentation layer talks to: session state,
//! catalog browsing, promo handling and order submission.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Presentation (out of scope)                                           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   ★ tasty-session (THIS CRATE) ★                                       │
//! │   ┌──────────────┬──────────────┬──────────────┬──────────────┐        │
//! │   │  storefront  │    state     │    views     │    error     │        │
//! │   │  Storefront  │ SessionState │  CartView    │  ApiError    │        │
//! │   │  operations  │ cart + promo │ OrderReceipt │              │        │
//! │   └──────────────┴──────────────┴──────────────┴──────────────┘        │
//! │        │                                                                │
//! │        ├──► tasty-core  (pure business logic)                           │
//! │        └──► tasty-db    (catalog + order persistence)                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust,ignore
//! use tasty_db::{Database, DbConfig};
//! use tasty_session::{init_tracing, SessionConfig, Storefront};
//!
//! init_tracing();
//! let config = SessionConfig::from_env();
//! let db = Database::new(DbConfig::new(&config.database_path)).await?;
//! let store = Storefront::new(db, config);
//!
//! store.add_to_cart("pizza-1", 2).await?;
//! store.apply_promo("VIJAY");
//! let receipt = store.place_order().await?;
//! ```

pub mod config;
pub mod error;
pub mod state;
pub mod storefront;
pub mod views;

pub use config::SessionConfig;
pub use error::{ApiError, ErrorCode};
pub use state::{Session, SessionState};
pub use storefront::Storefront;
pub use views::{CartView, OrderReceipt};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// Controlled via `RUST_LOG`; the default keeps our crates chatty and
/// sqlx quiet:
/// ```text
/// RUST_LOG=info,tasty=debug,sqlx=warn
/// ```
///
/// Call once at startup. Calling twice panics (tracing allows only one
/// global subscriber).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tasty=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
