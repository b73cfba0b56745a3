//! # Validation Module
//!
//! Input validation for values entering the core: customer details, stock
//! and cart quantities, receipt layout.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shop front (farm-shop)                                       │
//! │  ├── Parsing (is the phone number a number at all?)                    │
//! │  └── Re-prompting on failure                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Business rule validation                                          │
//! │  └── Runs before any state changes                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farm_core::validation::{validate_required, validate_quantity};
//!
//! assert_eq!(validate_required("name", "  Jack ").unwrap(), "Jack");
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_QUANTITY, MAX_RECEIPT_WIDTH, MIN_RECEIPT_WIDTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a phone number.
///
/// ## Rules
/// - Must be zero or greater
pub fn validate_phone_number(phone_number: i64) -> ValidationResult<()> {
    if phone_number < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "phone number".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock or cart quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed `MAX_QUANTITY`
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a receipt width in columns.
///
/// ## Rules
/// - Between `MIN_RECEIPT_WIDTH` and `MAX_RECEIPT_WIDTH` inclusive
pub fn validate_receipt_width(width: usize) -> ValidationResult<()> {
    if !(MIN_RECEIPT_WIDTH..=MAX_RECEIPT_WIDTH).contains(&width) {
        return Err(ValidationError::OutOfRange {
            field: "receipt width".to_string(),
            min: MIN_RECEIPT_WIDTH as i64,
            max: MAX_RECEIPT_WIDTH as i64,
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
    fn test_validate_required() {
        assert_eq!(validate_required("name", "Jack").unwrap(), "Jack");
        assert_eq!(validate_required("name", "  Jack  ").unwrap(), "Jack");

        assert!(validate_required("name", "").is_err());
        assert!(validate_required("address", "   ").is_err());
    }

    #[test]
    fn test_validate_phone_number() {
        assert!(validate_phone_number(0).is_ok());
        assert!(validate_phone_number(1234567).is_ok());
        assert!(validate_phone_number(-1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());

        assert!(validate_quantity(MAX_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert_eq!(
            validate_quantity(MAX_QUANTITY + 1),
            Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_QUANTITY,
            })
        );
        assert!(validate_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_receipt_width() {
        assert!(validate_receipt_width(MIN_RECEIPT_WIDTH).is_ok());
        assert!(validate_receipt_width(42).is_ok());
        assert!(validate_receipt_width(MAX_RECEIPT_WIDTH).is_ok());

        assert!(validate_receipt_width(MIN_RECEIPT_WIDTH - 1).is_err());
        assert!(validate_receipt_width(MAX_RECEIPT_WIDTH + 1).is_err());
    }
}
