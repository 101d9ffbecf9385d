//! # Catalog Repository
//!
//! Database operations for the menu catalog (categories and menu items).
//!
//! ## Read Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Read Path                                   │
//! │                                                                         │
//! │  Home screen ──► list_categories() ──► all categories by name          │
//! │                                                                         │
//! │  Menu screen ──► list_menu_items(Some(cat)) ─► items in one category   │
//! │              └─► list_menu_items(None) ──────► the whole menu          │
//! │                                                                         │
//! │  Add to cart ──► get_menu_item(id) ──► Option<MenuItem>                │
//! │                                                                         │
//! │  The client treats the catalog as READ-ONLY; the insert methods exist  │
//! │  for the seed binary and for tests.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::money_column;
use tasty_core::{Category, MenuItem};

/// Repository for catalog database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CatalogRepository::new(pool);
/// let categories = repo.list_categories().await?;
/// let pizzas = repo.list_menu_items(Some("cat-pizza")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Lists all menu categories, ordered by name.
    pub async fn list_categories(&self) -> DbResult<Vec<Category>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, image
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let categories = rows
            .into_iter()
            .map(|row| {
                Ok(Category {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    image: row.try_get("image")?,
                })
            })
            .collect::<DbResult<Vec<_>>>()?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Lists menu items, optionally filtered to one category.
    ///
    /// ## Arguments
    /// * `category_id` - `Some(id)` for one category's items, `None` for the
    ///   whole menu
    pub async fn list_menu_items(&self, category_id: Option<&str>) -> DbResult<Vec<MenuItem>> {
        let rows = match category_id {
            Some(cat) => {
                sqlx::query(
                    r#"
                    SELECT id, name, description, price, image, category_id
                    FROM menu_items
                    WHERE category_id = ?1
                    ORDER BY name
                    "#,
                )
                .bind(cat)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, name, description, price, image, category_id
                    FROM menu_items
                    ORDER BY name
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        let items = rows
            .into_iter()
            .map(menu_item_from_row)
            .collect::<DbResult<Vec<_>>>()?;

        debug!(
            count = items.len(),
            category = category_id.unwrap_or("<all>"),
            "Listed menu items"
        );
        Ok(items)
    }

    /// Gets a menu item by its document id.
    ///
    /// ## Returns
    /// * `Ok(Some(MenuItem))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_menu_item(&self, id: &str) -> DbResult<Option<MenuItem>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price, image, category_id
            FROM menu_items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(menu_item_from_row).transpose()
    }

    /// Inserts a category. Used by the seed binary and tests.
    pub async fn insert_category(&self, category: &Category) -> DbResult<()> {
        debug!(id = %category.id, name = %category.name, "Inserting category");

        sqlx::query(
            r#"
            INSERT INTO categories (id, name, image)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.image)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts a menu item. Used by the seed binary and tests.
    pub async fn insert_menu_item(&self, item: &MenuItem) -> DbResult<()> {
        debug!(id = %item.id, name = %item.name, "Inserting menu item");

        sqlx::query(
            r#"
            INSERT INTO menu_items (id, name, description, price, image, category_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price.amount().to_string())
        .bind(&item.image)
        .bind(&item.category_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts menu items (for diagnostics and seed idempotency).
    pub async fn count_menu_items(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Maps a menu_items row to the domain type.
fn menu_item_from_row(row: SqliteRow) -> DbResult<MenuItem> {
    Ok(MenuItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: money_column(&row, "price")?,
        image: row.try_get("image")?,
        category_id: row.try_get("category_id")?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use tasty_core::Money;

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.catalog();

        repo.insert_category(&Category {
            id: "cat-pizza".to_string(),
            name: "Pizza".to_string(),
            image: None,
        })
        .await
        .unwrap();

        repo.insert_menu_item(&MenuItem {
            id: "pizza-1".to_string(),
            name: "Margherita Pizza".to_string(),
            description: Some("Classic pizza with tomato sauce and mozzarella cheese".to_string()),
            price: Money::from_major_minor(12, 99),
            image: None,
            category_id: Some("cat-pizza".to_string()),
        })
        .await
        .unwrap();

        repo.insert_menu_item(&MenuItem {
            id: "pizza-2".to_string(),
            name: "Pepperoni Pizza".to_string(),
            description: None,
            price: Money::from_major_minor(14, 99),
            image: None,
            category_id: Some("cat-pizza".to_string()),
        })
        .await
        .unwrap();

        db
    }

    #[tokio::test]
    async fn test_list_categories() {
        let db = seeded_db().await;
        let categories = db.catalog().list_categories().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Pizza");
    }

    #[tokio::test]
    async fn test_list_menu_items_by_category() {
        let db = seeded_db().await;

        let items = db
            .catalog()
            .list_menu_items(Some("cat-pizza"))
            .await
            .unwrap();
        assert_eq!(items.len(), 2);

        let none = db
            .catalog()
            .list_menu_items(Some("cat-sushi"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_menu_item_round_trips_price() {
        let db = seeded_db().await;

        let item = db.catalog().get_menu_item("pizza-1").await.unwrap().unwrap();
        assert_eq!(item.price, Money::from_major_minor(12, 99));
        assert_eq!(item.name, "Margherita Pizza");

        assert!(db.catalog().get_menu_item("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_category_id_rejected() {
        let db = seeded_db().await;

        let err = db
            .catalog()
            .insert_category(&Category {
                id: "cat-pizza".to_string(),
                name: "Pizza Again".to_string(),
                image: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, crate::error::DbError::UniqueViolation { .. }));
    }
}
