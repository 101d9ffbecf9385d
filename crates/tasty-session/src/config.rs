//! # Session Configuration
//!
//! Configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TASTY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use tasty_core::Money;

/// Storefront configuration.
///
/// Most fields have sensible defaults for development; deployments override
/// via environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Store name (displayed in the app header and on receipts)
    pub store_name: String,

    /// Path to the SQLite database file
    pub database_path: PathBuf,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for SessionConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Tasty Delights"
    /// - Database: `./tasty.db`
    /// - Currency: $
    fn default() -> Self {
        SessionConfig {
            store_name: "Tasty Delights".to_string(),
            database_path: PathBuf::from("./tasty.db"),
            currency_symbol: "$".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a new SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TASTY_STORE_NAME`: Override store name
    /// - `TASTY_DB_PATH`: Override database path
    /// - `TASTY_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        let mut config = SessionConfig::default();

        if let Ok(store_name) = std::env::var("TASTY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(path) = std::env::var("TASTY_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }

        if let Ok(symbol) = std::env::var("TASTY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a money amount as a currency string with two decimal places.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = SessionConfig::default();
    /// assert_eq!(config.format_money(Money::from_major_minor(12, 34)), "$12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let rounded = amount.amount().round_dp(2);
        format!(
            "{}{}{:.2}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            rounded.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.store_name, "Tasty Delights");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_format_money() {
        let config = SessionConfig::default();
        assert_eq!(config.format_money(Money::from_major_minor(12, 34)), "$12.34");
        assert_eq!(config.format_money(Money::from_major_minor(1, 0)), "$1.00");
        assert_eq!(config.format_money(Money::from_major_minor(-5, 50)), "-$5.50");
    }

    #[test]
    fn test_format_money_rounds_subcent_for_display() {
        let config = SessionConfig::default();
        // 23.475 displays as 23.48 (banker's rounding would give .48 here too)
        let total = Money::new(Decimal::new(23475, 3));
        assert_eq!(config.format_money(total), "$23.48");
    }
}
