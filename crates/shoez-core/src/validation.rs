//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form                                                 │
//! │  ├── `required` attributes, input types                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  ├── Raw strings parsed into typed values                              │
//! │  └── THIS MODULE: field rules and ranges                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain (admin catalog, cart, rating)                         │
//! │  └── Only typed, validated values reach here                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoez_core::validation::{parse_money_field, validate_quantity};
//!
//! let price = parse_money_field("Price", "49.90").unwrap();
//! assert_eq!(price.cents(), 4990);
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MAX_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted search query.
const MAX_QUERY_LEN: usize = 100;

/// Longest accepted product name.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Requires a non-blank value and returns it trimmed.
///
/// ## Example
/// ```rust
/// use shoez_core::validation::require;
///
/// assert_eq!(require("Name", "  Runner ").unwrap(), "Runner");
/// assert_eq!(require("Name", "  ").unwrap_err().to_string(), "Name is required");
/// ```
pub fn require<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = require(field, name)?;

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (search then yields nothing)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a star rating.
///
/// ## Rules
/// - Between 1 and 5 inclusive
pub fn validate_rating(star: u8) -> ValidationResult<()> {
    if star == 0 || star > MAX_RATING {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: i64::from(MAX_RATING),
        });
    }

    Ok(())
}

// =============================================================================
// Form Field Parsers
// =============================================================================
// Admin forms submit every field as text. These parsers turn one raw field
// into a typed value, reporting errors against the field's label.

/// Parses a required, non-negative money field (e.g. "Price").
pub fn parse_money_field(field: &str, raw: &str) -> ValidationResult<Money> {
    let text = require(field, raw)?;
    let money = Money::parse_decimal(text).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a number".to_string(),
    })?;

    if money.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(money)
}

/// Parses a required whole number within `min..=max` (e.g. "Stock").
pub fn parse_count_field(field: &str, raw: &str, min: i64, max: i64) -> ValidationResult<i64> {
    let text = require(field, raw)?;
    let value: i64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(value)
}

/// Parses a required whole percentage in `0..=100`.
///
/// A trailing `%` is accepted ("15%").
pub fn parse_percent_field(field: &str, raw: &str) -> ValidationResult<u32> {
    let text = require(field, raw)?;
    let text = text.strip_suffix('%').unwrap_or(text).trim_end();
    let value = parse_count_field(field, text, 0, 100)?;
    Ok(value as u32)
}

/// Parses a required `YYYY-MM-DD` date (the value of an HTML date input).
pub fn parse_date_field(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    let text = require(field, raw)?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a date in YYYY-MM-DD format".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require("Name", "Runner").unwrap(), "Runner");
        assert!(require("Name", "").is_err());
        assert!(require("Name", "   ").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Name", "Trail Runner 2").is_ok());
        assert!(validate_product_name("Name", "").is_err());
        assert!(validate_product_name("Name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  boots ").unwrap(), "boots");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        for star in 1..=5 {
            assert!(validate_rating(star).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_parse_money_field() {
        assert_eq!(parse_money_field("Price", "49.90").unwrap().cents(), 4990);
        assert_eq!(
            parse_money_field("Price", "").unwrap_err().to_string(),
            "Price is required"
        );
        assert!(parse_money_field("Price", "forty").is_err());
        assert!(parse_money_field("Price", "-1").is_err());
    }

    #[test]
    fn test_parse_count_field() {
        assert_eq!(parse_count_field("Stock", "12", 0, 1000).unwrap(), 12);
        assert!(parse_count_field("Stock", "-3", 0, 1000).is_err());
        assert!(parse_count_field("Stock", "1.5", 0, 1000).is_err());
    }

    #[test]
    fn test_parse_percent_field() {
        assert_eq!(parse_percent_field("Discount", "15").unwrap(), 15);
        assert_eq!(parse_percent_field("Discount", "15%").unwrap(), 15);
        assert!(parse_percent_field("Discount", "101").is_err());
    }

    #[test]
    fn test_parse_date_field() {
        let date = parse_date_field("Expiry date", "2026-12-31").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        assert!(parse_date_field("Expiry date", "31/12/2026").is_err());
        assert_eq!(
            parse_date_field("Expiry date", "").unwrap_err().to_string(),
            "Expiry date is required"
        );
    }
}
