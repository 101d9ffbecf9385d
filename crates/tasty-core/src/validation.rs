//! # Validation Module
//!
//! Business rule validation for input data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI         - Disabled buttons, inline hints (untrusted)       │
//! │  Layer 2: THIS FILE  - Business rules (names, prices, quantities)       │
//! │  Layer 3: Database   - CHECK constraints, NOT NULL (last resort)        │
//! │                                                                         │
//! │  This module validates BEFORE data reaches the cart or the database.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities have a lower bound but deliberately NO upper bound, and cart
//! size is unbounded. Catalog document ids are opaque strings assigned by
//! the store, so there is nothing to validate about their shape beyond
//! non-emptiness.

use crate::error::ValidationError;
use crate::money::Money;

/// Maximum length for item and category names.
pub const MAX_NAME_LENGTH: usize = 200;

// =============================================================================
// Validation Functions
// =============================================================================

/// Validates an item or category name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LENGTH`] characters
pub fn validate_name(name: &str, field: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must not be negative (zero is allowed for complimentary items)
pub fn validate_price(price: Money) -> Result<(), ValidationError> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a quantity for adding to the cart.
///
/// ## Rules
/// - Must be at least 1. No upper bound.
pub fn validate_quantity(quantity: i64) -> Result<(), ValidationError> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates an opaque document id.
///
/// ## Rules
/// - Must not be empty. Ids are store-assigned; no shape is assumed.
pub fn validate_doc_id(id: &str, field: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Margherita Pizza", "name").is_ok());
        assert!(validate_name("", "name").is_err());
        assert!(validate_name("   ", "name").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH), "name").is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH + 1), "name").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_major_minor(12, 99)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_major_minor(-1, 0)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok()); // no upper bound
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_doc_id() {
        assert!(validate_doc_id("abc123", "item_id").is_ok());
        assert!(validate_doc_id("", "item_id").is_err());
        assert!(validate_doc_id("  ", "item_id").is_err());
    }
}
