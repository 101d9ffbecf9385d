//! # Repository Layer
//!
//! Data access repositories for the Tasty Delights database.
//!
//! ## Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Database (pool.rs)                                                    │
//! │       │                                                                 │
//! │       ├──► CatalogRepository ──► categories, menu_items (read-mostly)  │
//! │       │                                                                 │
//! │       └──► OrderRepository ───► orders, order_lines (write-once)       │
//! │                                                                         │
//! │  Repositories own row ↔ domain translation and nothing else.           │
//! │  Monetary columns are decimal TEXT; decoding failures surface as       │
//! │  DbError::Corrupt rather than panicking.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries are built with runtime binding (`sqlx::query` + manual row
//! mapping) so the crate compiles without a live database.

pub mod catalog;
pub mod order;

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::str::FromStr;

use crate::error::{DbError, DbResult};
use tasty_core::Money;

/// Decodes a decimal TEXT column into Money.
///
/// Stored prices are exact decimal strings ("12.99", "6.495"). Anything
/// else in the column is data corruption, reported as such.
pub(crate) fn money_column(row: &SqliteRow, column: &str) -> DbResult<Money> {
    let raw: String = row
        .try_get(column)
        .map_err(|e| DbError::corrupt(column, e.to_string()))?;
    let amount =
        Decimal::from_str(raw.trim()).map_err(|e| DbError::corrupt(column, e.to_string()))?;
    Ok(Money::new(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_money_column_decodes_decimal_text() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let row = sqlx::query("SELECT '12.99' AS price")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(
            money_column(&row, "price").unwrap(),
            Money::from_major_minor(12, 99)
        );
    }

    #[tokio::test]
    async fn test_money_column_rejects_garbage() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let row = sqlx::query("SELECT 'not-a-number' AS price")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert!(matches!(
            money_column(&row, "price"),
            Err(DbError::Corrupt { .. })
        ));
    }
}
