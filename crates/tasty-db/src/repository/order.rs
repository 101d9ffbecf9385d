//! # Order Repository
//!
//! Database operations for submitted orders.
//!
//! ## Order Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Write Path                                    │
//! │                                                                         │
//! │  place_order (tasty-session)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  insert_order(order, lines)                                            │
//! │       │                                                                 │
//! │       ├── BEGIN TRANSACTION                                            │
//! │       ├── INSERT INTO orders                                           │
//! │       ├── INSERT INTO order_lines (one per cart line)                  │
//! │       └── COMMIT                                                       │
//! │                                                                         │
//! │  Either the whole order lands or none of it does - a header without    │
//! │  its lines would be an unfulfillable order.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders are write-once snapshots: there is no update method here.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::repository::money_column;
use tasty_core::{Order, OrderLine, OrderStatus};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts an order and its lines atomically.
    ///
    /// ## Arguments
    /// * `order` - Order header (id generated beforehand)
    /// * `lines` - Line snapshots; their `order_id` must match `order.id`
    pub async fn insert_order(&self, order: &Order, lines: &[OrderLine]) -> DbResult<()> {
        debug!(id = %order.id, line_count = lines.len(), "Inserting order");

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, subtotal, delivery_fee, discount, total, status, placed_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&order.id)
        .bind(order.subtotal.amount().to_string())
        .bind(order.delivery_fee.amount().to_string())
        .bind(order.discount.amount().to_string())
        .bind(order.total.amount().to_string())
        .bind(order.status.as_str())
        .bind(order.placed_at.to_rfc3339())
        .execute(&mut *tx)
        .await?;

        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO order_lines (
                    id, order_id, item_id, name, unit_price, quantity, line_total
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
            )
            .bind(&line.id)
            .bind(&line.order_id)
            .bind(&line.item_id)
            .bind(&line.name)
            .bind(line.unit_price.amount().to_string())
            .bind(line.quantity)
            .bind(line.line_total.amount().to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(id = %order.id, "Order committed");
        Ok(())
    }

    /// Gets an order by its id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let row = sqlx::query(
            r#"
            SELECT id, subtotal, delivery_fee, discount, total, status, placed_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(order_from_row).transpose()
    }

    /// Gets the line snapshots for an order.
    pub async fn get_lines(&self, order_id: &str) -> DbResult<Vec<OrderLine>> {
        let rows = sqlx::query(
            r#"
            SELECT id, order_id, item_id, name, unit_price, quantity, line_total
            FROM order_lines
            WHERE order_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(OrderLine {
                    id: row.try_get("id")?,
                    order_id: row.try_get("order_id")?,
                    item_id: row.try_get("item_id")?,
                    name: row.try_get("name")?,
                    unit_price: money_column(&row, "unit_price")?,
                    quantity: row.try_get("quantity")?,
                    line_total: money_column(&row, "line_total")?,
                })
            })
            .collect()
    }

    /// Counts submitted orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Maps an orders row to the domain type.
fn order_from_row(row: SqliteRow) -> DbResult<Order> {
    let status_raw: String = row.try_get("status")?;
    let status: OrderStatus = status_raw
        .parse()
        .map_err(|e: String| DbError::corrupt("status", e))?;

    let placed_raw: String = row.try_get("placed_at")?;
    let placed_at = chrono::DateTime::parse_from_rfc3339(&placed_raw)
        .map_err(|e| DbError::corrupt("placed_at", e.to_string()))?
        .with_timezone(&chrono::Utc);

    Ok(Order {
        id: row.try_get("id")?,
        subtotal: money_column(&row, "subtotal")?,
        delivery_fee: money_column(&row, "delivery_fee")?,
        discount: money_column(&row, "discount")?,
        total: money_column(&row, "total")?,
        status,
        placed_at,
    })
}

/// Generates a new order id.
pub fn generate_order_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates a new order line id.
pub fn generate_line_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tasty_core::Money;

    fn sample_order() -> (Order, Vec<OrderLine>) {
        let order_id = generate_order_id();
        let order = Order {
            id: order_id.clone(),
            subtotal: Money::from_major_minor(25, 98),
            delivery_fee: Money::from_major_minor(3, 99),
            discount: Money::new(Decimal::new(6495, 3)), // 6.495
            total: Money::new(Decimal::new(23475, 3)),   // 23.475
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
        };
        let lines = vec![OrderLine {
            id: generate_line_id(),
            order_id,
            item_id: "pizza-1".to_string(),
            name: "Margherita Pizza".to_string(),
            unit_price: Money::from_major_minor(12, 99),
            quantity: 2,
            line_total: Money::from_major_minor(25, 98),
        }];
        (order, lines)
    }

    #[tokio::test]
    async fn test_insert_and_fetch_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.orders();
        let (order, lines) = sample_order();

        repo.insert_order(&order, &lines).await.unwrap();

        let fetched = repo.get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, OrderStatus::Pending);
        assert_eq!(fetched.subtotal, Money::from_major_minor(25, 98));
        // Sub-cent discount survives the TEXT round trip exactly
        assert_eq!(fetched.discount, Money::new(Decimal::new(6495, 3)));
        assert_eq!(fetched.total, Money::new(Decimal::new(23475, 3)));

        let fetched_lines = repo.get_lines(&order.id).await.unwrap();
        assert_eq!(fetched_lines.len(), 1);
        assert_eq!(fetched_lines[0].quantity, 2);
        assert_eq!(
            fetched_lines[0].line_total,
            Money::from_major_minor(25, 98)
        );
    }

    #[tokio::test]
    async fn test_get_missing_order_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.orders().get_by_id("ghost").await.unwrap().is_none());
    }

    /// A failing line insert must roll the header back too.
    #[tokio::test]
    async fn test_insert_is_atomic() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.orders();
        let (order, mut lines) = sample_order();

        // Violates the quantity >= 1 CHECK constraint
        lines[0].quantity = 0;

        assert!(repo.insert_order(&order, &lines).await.is_err());
        assert!(repo.get_by_id(&order.id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_count() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.orders();

        assert_eq!(repo.count().await.unwrap(), 0);

        let (order, lines) = sample_order();
        repo.insert_order(&order, &lines).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
