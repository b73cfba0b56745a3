//! # Farm
//!
//! Ties stock, customers and sales together behind the operations the shop
//! front calls.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Farm                                       │
//! │                                                                         │
//! │   inventory ──── add_to_cart() ────► manager ──── checkout() ────►      │
//! │  (dyn Inventory)  takes stock out   (ongoing)   non-empty only  history │
//! │                                                                         │
//! │   address book ── get_customer() ──► Customer ── start_transaction()    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products added to a cart leave the inventory, so stock on hand never
//! counts something a customer is holding.

use crate::customer::{AddressBook, Customer};
use crate::error::{CoreError, CoreResult};
use crate::history::TransactionHistory;
use crate::inventory::Inventory;
use crate::manager::TransactionManager;
use crate::receipt::ReceiptPrinter;
use crate::transaction::Transaction;
use crate::types::{Barcode, Product, Quality};
use crate::validation::validate_quantity;

/// The farm's shop.
#[derive(Debug)]
pub struct Farm {
    inventory: Box<dyn Inventory>,
    address_book: AddressBook,
    manager: TransactionManager,
    history: TransactionHistory,
    printer: ReceiptPrinter,
}

impl Farm {
    /// Creates a farm with an idle manager and an empty history.
    pub fn new(inventory: Box<dyn Inventory>, address_book: AddressBook) -> Self {
        Farm {
            inventory,
            address_book,
            manager: TransactionManager::new(),
            history: TransactionHistory::new(),
            printer: ReceiptPrinter::default(),
        }
    }

    /// Prints receipts with `printer` instead of the default layout.
    pub fn with_printer(mut self, printer: ReceiptPrinter) -> Self {
        self.printer = printer;
        self
    }

    pub fn all_customers(&self) -> Vec<Customer> {
        self.address_book.all_records()
    }

    pub fn all_stock(&self) -> Vec<Product> {
        self.inventory.all_products()
    }

    pub fn inventory(&self) -> &dyn Inventory {
        self.inventory.as_ref()
    }

    pub fn transaction_manager(&self) -> &TransactionManager {
        &self.manager
    }

    pub fn transaction_history(&self) -> &TransactionHistory {
        &self.history
    }

    pub fn receipt_printer(&self) -> &ReceiptPrinter {
        &self.printer
    }

    pub fn save_customer(&mut self, customer: Customer) -> CoreResult<()> {
        self.address_book.add_customer(customer)
    }

    pub fn get_customer(&self, name: &str, phone_number: i64) -> CoreResult<Customer> {
        self.address_book.get_customer(name, phone_number)
    }

    // -------------------------------------------------------------------------
    // Stock
    // -------------------------------------------------------------------------

    pub fn stock_product(&mut self, barcode: Barcode, quality: Quality) {
        self.inventory.add_product(barcode, quality);
    }

    /// Stocks `quantity` identical products. More than one at a time needs a
    /// quantity-capable inventory.
    pub fn stock_product_quantity(
        &mut self,
        barcode: Barcode,
        quality: Quality,
        quantity: i64,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;
        if quantity == 1 {
            self.inventory.add_product(barcode, quality);
            return Ok(());
        }
        if !self.inventory.supports_quantities() {
            return Err(CoreError::not_fancy("supply"));
        }
        self.inventory.add_product_quantity(barcode, quality, quantity)
    }

    // -------------------------------------------------------------------------
    // Sales
    // -------------------------------------------------------------------------

    pub fn start_transaction(&mut self, transaction: Transaction) -> CoreResult<()> {
        self.manager.set_ongoing_transaction(transaction)
    }

    /// Moves one product with `barcode` from stock into the ongoing
    /// customer's cart. Returns how many were added (0 when out of stock).
    pub fn add_to_cart(&mut self, barcode: Barcode) -> CoreResult<usize> {
        if !self.manager.has_ongoing_transaction() {
            return Err(CoreError::NoOngoingTransaction);
        }
        let taken = self.inventory.remove_product(barcode);
        self.register(taken)
    }

    /// Moves up to `quantity` products with `barcode` into the ongoing
    /// customer's cart, best quality first on a fancy inventory.
    ///
    /// ## Errors
    /// - `Validation` if `quantity` is below 1
    /// - `UnsupportedStockOperation` for more than one on a basic inventory
    /// - `NoOngoingTransaction` when nobody is shopping
    pub fn add_to_cart_quantity(&mut self, barcode: Barcode, quantity: i64) -> CoreResult<usize> {
        validate_quantity(quantity)?;
        if quantity > 1 && !self.inventory.supports_quantities() {
            return Err(CoreError::not_fancy("purchase"));
        }
        if quantity == 1 {
            return self.add_to_cart(barcode);
        }
        if !self.manager.has_ongoing_transaction() {
            return Err(CoreError::NoOngoingTransaction);
        }
        let taken = self.inventory.remove_product_quantity(barcode, quantity)?;
        self.register(taken)
    }

    fn register(&mut self, products: Vec<Product>) -> CoreResult<usize> {
        let added = products.len();
        for product in products {
            self.manager.register_pending_purchase(product)?;
        }
        Ok(added)
    }

    /// Closes the ongoing transaction. Returns true if anything was bought,
    /// in which case the transaction goes into the history.
    pub fn checkout(&mut self) -> CoreResult<bool> {
        let closed = self.manager.close_current_transaction()?;
        if closed.purchases().is_empty() {
            return Ok(false);
        }
        Ok(self.history.record_transaction(closed))
    }

    /// Receipt for the most recent recorded sale.
    pub fn last_receipt(&self) -> Option<String> {
        self.history
            .last_transaction()
            .map(|t| t.receipt_with(&self.printer))
    }
}
