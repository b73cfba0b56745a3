//! # farm-core: Pure Business Logic for the Farm Shop
//!
//! This crate is the **heart** of the farm shop. It contains the stock,
//! customer and sales logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Farm Shop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    farm-shop (binary)                           │   │
//! │  │    config ──► logging ──► text menu (inventory/address/sales)   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Farm API                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ farm-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ customer  │  │ inventory │  │   │
//! │  │   │  Barcode  │  │   Money   │  │   cart    │  │ Basic     │  │   │
//! │  │   │  Product  │  │ rounding  │  │ AddrBook  │  │ Fancy     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │transaction│  │  manager  │  │  history  │  │  receipt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO CONFIG FILES                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Barcode, Quality, Product)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Argument checks
//! - [`transaction`] - Plain, categorised and special-sale transactions
//! - [`manager`] / [`history`] - The ongoing transaction and the sales ledger
//! - [`farm`] - Orchestrator the shop front talks to
//!
//! ## Example Usage
//!
//! ```rust
//! use farm_core::{AddressBook, Barcode, Customer, Farm, FancyInventory, Quality, Transaction};
//!
//! let mut farm = Farm::new(Box::new(FancyInventory::new()), AddressBook::new());
//! farm.stock_product_quantity(Barcode::Egg, Quality::Gold, 6).unwrap();
//!
//! let jack = Customer::new("Jack", 1234567, "1 Farm Lane").unwrap();
//! farm.save_customer(jack.clone()).unwrap();
//!
//! farm.start_transaction(Transaction::categorised(jack)).unwrap();
//! assert_eq!(farm.add_to_cart_quantity(Barcode::Egg, 4).unwrap(), 4);
//! assert!(farm.checkout().unwrap());
//!
//! assert_eq!(farm.transaction_history().gross_earnings().cents(), 200);
//! assert!(farm.last_receipt().unwrap().contains("Jack"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod customer;
pub mod error;
pub mod farm;
pub mod history;
pub mod inventory;
pub mod manager;
pub mod money;
pub mod receipt;
pub mod transaction;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, SharedCart};
pub use customer::{AddressBook, Customer};
pub use error::{CoreError, CoreResult, ValidationError};
pub use farm::Farm;
pub use history::TransactionHistory;
pub use inventory::{BasicInventory, FancyInventory, Inventory};
pub use manager::TransactionManager;
pub use money::Money;
pub use receipt::ReceiptPrinter;
pub use transaction::{Transaction, TransactionKind};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Receipt width used when nothing else is configured.
pub const DEFAULT_RECEIPT_WIDTH: usize = 42;

/// Narrowest receipt the printer will lay out.
///
/// ## Business Reason
/// The categorised layout needs four readable columns.
pub const MIN_RECEIPT_WIDTH: usize = 30;

/// Widest receipt the printer will lay out.
pub const MAX_RECEIPT_WIDTH: usize = 120;

/// Largest quantity accepted by a single stock or cart operation.
///
/// ## Business Reason
/// A fancy inventory holds one record per unit, so one command can only
/// ask for what a farm could realistically carry.
pub const MAX_QUANTITY: i64 = 10_000;
