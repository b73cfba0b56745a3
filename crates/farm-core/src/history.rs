//! # Transaction History
//!
//! Append-only ledger of checked-out transactions, with the sales figures the
//! shop front reports.
//!
//! Per-barcode figures use each transaction's own pricing rules, so special
//! sales count at their discounted subtotal.

use crate::money::Money;
use crate::transaction::Transaction;
use crate::types::Barcode;

/// Finalised transactions in the order they were recorded.
#[derive(Debug, Default)]
pub struct TransactionHistory {
    transactions: Vec<Transaction>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        TransactionHistory {
            transactions: Vec::new(),
        }
    }

    /// Records `transaction` if it has been finalised. Active transactions
    /// are ignored; returns whether the transaction was recorded.
    pub fn record_transaction(&mut self, transaction: Transaction) -> bool {
        if !transaction.is_finalised() {
            return false;
        }
        self.transactions.push(transaction);
        true
    }

    /// The most recently recorded transaction.
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    pub fn total_transactions_made(&self) -> usize {
        self.transactions.len()
    }

    // -------------------------------------------------------------------------
    // Earnings
    // -------------------------------------------------------------------------

    pub fn gross_earnings(&self) -> Money {
        self.transactions.iter().map(Transaction::total).sum()
    }

    /// Earnings from one barcode across every transaction.
    pub fn gross_earnings_for(&self, barcode: Barcode) -> Money {
        self.transactions
            .iter()
            .map(|t| t.purchase_subtotal(barcode))
            .sum()
    }

    /// First transaction with the largest total. `None` when no transaction
    /// earned anything.
    pub fn highest_grossing_transaction(&self) -> Option<&Transaction> {
        let mut highest = None;
        let mut highest_total = Money::zero();
        for transaction in &self.transactions {
            let total = transaction.total();
            if total > highest_total {
                highest = Some(transaction);
                highest_total = total;
            }
        }
        highest
    }

    /// Mean total per recorded transaction, in cents. 0.0 when empty.
    pub fn average_spend_per_visit(&self) -> f64 {
        if self.transactions.is_empty() {
            return 0.0;
        }
        self.gross_earnings().cents() as f64 / self.transactions.len() as f64
    }

    /// Mean discount per unit sold of `barcode`, in cents. 0.0 when none sold.
    pub fn average_product_discount(&self, barcode: Barcode) -> f64 {
        let units = self.total_products_sold_for(barcode);
        if units == 0 {
            return 0.0;
        }
        let list_price: Money = self
            .transactions
            .iter()
            .map(|t| t.undiscounted_subtotal(barcode))
            .sum();
        let discount = list_price - self.gross_earnings_for(barcode);
        discount.cents() as f64 / units as f64
    }

    // -------------------------------------------------------------------------
    // Units
    // -------------------------------------------------------------------------

    pub fn total_products_sold(&self) -> usize {
        self.transactions.iter().map(|t| t.purchases().len()).sum()
    }

    pub fn total_products_sold_for(&self, barcode: Barcode) -> usize {
        self.transactions
            .iter()
            .map(|t| t.purchase_quantity(barcode))
            .sum()
    }

    /// Barcode with the most units sold. Ties go to the barcode listed first
    /// in the catalog; `None` when nothing has sold.
    pub fn most_popular_product(&self) -> Option<Barcode> {
        let mut popular = None;
        let mut most_sold = 0;
        for barcode in Barcode::ALL {
            let sold = self.total_products_sold_for(barcode);
            if sold > most_sold {
                popular = Some(barcode);
                most_sold = sold;
            }
        }
        popular
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
