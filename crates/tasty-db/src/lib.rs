//! # tasty-db: Database Layer for Tasty Delights
//!
//! SQLite persistence for the menu catalog and submitted orders.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   tasty-session ──► tasty-db (THIS CRATE) ──► SQLite file              │
//! │                          │                                              │
//! │                          └──► tasty-core (domain types only)            │
//! │                                                                         │
//! │   Modules:                                                              │
//! │   - pool        Connection pool + Database handle                       │
//! │   - migrations  Embedded schema migrations                              │
//! │   - repository  CatalogRepository, OrderRepository                      │
//! │   - error       DbError                                                 │
//! │                                                                         │
//! │   No business logic lives here. Repositories translate rows to         │
//! │   tasty-core types and back, nothing more.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust,ignore
//! use tasty_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./tasty.db")).await?;
//! let categories = db.catalog().list_categories().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::catalog::CatalogRepository;
pub use repository::order::{generate_line_id, generate_order_id, OrderRepository};
