//! # Transaction Manager
//!
//! Holds the one transaction the shop is currently serving.
//!
//! ```text
//!            set_ongoing_transaction(t)
//!   ┌──────┐ ─────────────────────────► ┌────────┐
//!   │ IDLE │                            │ ACTIVE │ ◄── register_pending_purchase(p)
//!   └──────┘ ◄───────────────────────── └────────┘
//!            close_current_transaction()
//! ```
//!
//! Every rejected call leaves the manager and all carts exactly as they were.

use crate::error::{CoreError, CoreResult};
use crate::transaction::Transaction;
use crate::types::Product;

/// Enforces that at most one transaction is ongoing.
#[derive(Debug, Default)]
pub struct TransactionManager {
    ongoing: Option<Transaction>,
}

impl TransactionManager {
    pub fn new() -> Self {
        TransactionManager { ongoing: None }
    }

    pub fn has_ongoing_transaction(&self) -> bool {
        self.ongoing.is_some()
    }

    /// The transaction being served, if any.
    pub fn ongoing_transaction(&self) -> Option<&Transaction> {
        self.ongoing.as_ref()
    }

    /// Begins serving `transaction`.
    ///
    /// ## Errors
    /// - `TransactionInProgress` if another transaction is ongoing
    /// - `TransactionFinalised` if `transaction` has already been checked out
    pub fn set_ongoing_transaction(&mut self, transaction: Transaction) -> CoreResult<()> {
        if self.has_ongoing_transaction() {
            return Err(CoreError::TransactionInProgress);
        }
        if transaction.is_finalised() {
            return Err(CoreError::TransactionFinalised);
        }
        self.ongoing = Some(transaction);
        Ok(())
    }

    /// Puts `product` in the ongoing customer's cart.
    pub fn register_pending_purchase(&mut self, product: Product) -> CoreResult<()> {
        let cart = self
            .ongoing
            .as_ref()
            .ok_or(CoreError::NoOngoingTransaction)?
            .active_cart()
            .ok_or(CoreError::TransactionFinalised)?;
        cart.add_product(product);
        Ok(())
    }

    /// Finalises the ongoing transaction and hands it back. The manager is
    /// idle afterwards.
    pub fn close_current_transaction(&mut self) -> CoreResult<Transaction> {
        let mut transaction = self.ongoing.take().ok_or(CoreError::NoOngoingTransaction)?;
        if let Err(err) = transaction.finalise() {
            self.ongoing = Some(transaction);
            return Err(err);
        }
        Ok(transaction)
    }
}
