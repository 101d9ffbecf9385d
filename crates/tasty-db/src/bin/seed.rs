//! Seeds a Tasty Delights database with the demo catalog.
//!
//! ## Usage
//! ```text
//! TASTY_DB_PATH=./tasty.db cargo run --bin seed
//! ```
//!
//! Idempotent: refuses to double-seed a database that already has menu items.

use tracing::{info, warn};

use tasty_core::{Category, MenuItem, Money};
use tasty_db::{Database, DbConfig, DbResult};

#[tokio::main]
async fn main() -> DbResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let path = std::env::var("TASTY_DB_PATH").unwrap_or_else(|_| "./tasty.db".to_string());
    let db = Database::new(DbConfig::new(&path)).await?;
    let catalog = db.catalog();

    if catalog.count_menu_items().await? > 0 {
        warn!(path = %path, "Database already seeded, nothing to do");
        return Ok(());
    }

    info!(path = %path, "Seeding demo catalog");

    for category in demo_categories() {
        catalog.insert_category(&category).await?;
    }
    for item in demo_menu_items() {
        catalog.insert_menu_item(&item).await?;
    }

    info!(
        items = catalog.count_menu_items().await?,
        "Seed complete"
    );
    Ok(())
}

fn demo_categories() -> Vec<Category> {
    vec![
        Category {
            id: "cat-pizza".to_string(),
            name: "Pizza".to_string(),
            image: Some("https://images.tastydelights.example/categories/pizza.jpg".to_string()),
        },
        Category {
            id: "cat-burgers".to_string(),
            name: "Burgers".to_string(),
            image: Some("https://images.tastydelights.example/categories/burgers.jpg".to_string()),
        },
        Category {
            id: "cat-sushi".to_string(),
            name: "Sushi".to_string(),
            image: Some("https://images.tastydelights.example/categories/sushi.jpg".to_string()),
        },
    ]
}

fn demo_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "pizza-1".to_string(),
            name: "Margherita Pizza".to_string(),
            description: Some(
                "Classic pizza with tomato sauce and mozzarella cheese".to_string(),
            ),
            price: Money::from_major_minor(12, 99),
            image: Some("https://images.tastydelights.example/items/margherita.jpg".to_string()),
            category_id: Some("cat-pizza".to_string()),
        },
        MenuItem {
            id: "pizza-2".to_string(),
            name: "Pepperoni Pizza".to_string(),
            description: Some("Loaded with pepperoni and extra cheese".to_string()),
            price: Money::from_major_minor(14, 99),
            image: Some("https://images.tastydelights.example/items/pepperoni.jpg".to_string()),
            category_id: Some("cat-pizza".to_string()),
        },
        MenuItem {
            id: "burger-1".to_string(),
            name: "Classic Burger".to_string(),
            description: Some("Beef patty with lettuce, tomato and house sauce".to_string()),
            price: Money::from_major_minor(9, 99),
            image: Some("https://images.tastydelights.example/items/classic-burger.jpg".to_string()),
            category_id: Some("cat-burgers".to_string()),
        },
        MenuItem {
            id: "burger-2".to_string(),
            name: "Cheeseburger".to_string(),
            description: Some("Classic burger topped with melted cheddar".to_string()),
            price: Money::from_major_minor(10, 99),
            image: Some("https://images.tastydelights.example/items/cheeseburger.jpg".to_string()),
            category_id: Some("cat-burgers".to_string()),
        },
        MenuItem {
            id: "sushi-1".to_string(),
            name: "California Roll".to_string(),
            description: Some("Crab, avocado and cucumber, eight pieces".to_string()),
            price: Money::from_major_minor(8, 99),
            image: Some("https://images.tastydelights.example/items/california-roll.jpg".to_string()),
            category_id: Some("cat-sushi".to_string()),
        },
        MenuItem {
            id: "sushi-2".to_string(),
            name: "Salmon Nigiri".to_string(),
            description: Some("Fresh salmon over seasoned rice, six pieces".to_string()),
            price: Money::from_major_minor(11, 99),
            image: Some("https://images.tastydelights.example/items/salmon-nigiri.jpg".to_string()),
            category_id: Some("cat-sushi".to_string()),
        },
    ]
}
