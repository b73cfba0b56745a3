//! # Error Types
//!
//! Domain-specific error types for farm-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  farm-core errors (this file)                                          │
//! │  ├── CoreError        - Structural, lookup and stock failures          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  farm-shop errors (app)                                                │
//! │  └── ConfigError      - Bad environment / flag values                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → shop front message                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, phone number, etc.)
//! 3. Errors are enum variants, never String
//! 4. Nothing here is fatal: the shop front turns every error into a message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A transaction was started while another one is still ongoing.
    #[error("A transaction is already in progress")]
    TransactionInProgress,

    /// A cart or checkout operation was attempted with no ongoing transaction.
    ///
    /// ## When This Occurs
    /// - `close_current_transaction` from the idle state
    /// - `register_pending_purchase` before any customer started shopping
    #[error("No ongoing transaction")]
    NoOngoingTransaction,

    /// The transaction has already been finalised and can no longer change.
    #[error("Transaction has already been finalised")]
    TransactionFinalised,

    /// The inventory in use cannot perform the requested stock operation.
    ///
    /// ## When This Occurs
    /// A basic inventory only handles one product at a time, so any
    /// quantity-based add or remove is rejected.
    #[error("{reason}")]
    UnsupportedStockOperation { reason: String },

    /// No customer with this name and phone number is in the address book.
    #[error("Customer not found: {name} ({phone_number})")]
    CustomerNotFound { name: String, phone_number: i64 },

    /// The address book already holds a customer with the same identity.
    #[error("Customer already exists: {0}")]
    DuplicateCustomer(String),

    /// A product name did not match any barcode in the catalog.
    #[error("Invalid product name provided: {0}")]
    UnknownProduct(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for the basic-inventory rejection.
    pub(crate) fn not_fancy(action: &str) -> Self {
        CoreError::UnsupportedStockOperation {
            reason: format!(
                "Current inventory is not fancy enough. Please {} products one at a time.",
                action
            ),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at construction or entry, before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CustomerNotFound {
            name: "Jack".to_string(),
            phone_number: 1234567,
        };
        assert_eq!(err.to_string(), "Customer not found: Jack (1234567)");

        assert_eq!(
            CoreError::not_fancy("purchase").to_string(),
            "Current inventory is not fancy enough. Please purchase products one at a time."
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "phone number".to_string(),
        };
        assert_eq!(err.to_string(), "phone number cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
