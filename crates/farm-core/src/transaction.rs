//! # Transactions
//!
//! A transaction records what a customer buys, from the moment they start
//! shopping until checkout locks the purchases in.
//!
//! ## Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Transaction Kinds                                    │
//! │                                                                         │
//! │  Plain          one receipt line per product, in purchase order        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Categorised    one receipt line per barcode, in catalog order         │
//! │     │           (quantity, unit price, subtotal)                       │
//! │     ▼                                                                   │
//! │  SpecialSale    categorised, with a percent discount per barcode       │
//! │                 applied to the subtotal and to the total               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The grouping views (`purchased_types`, `purchase_quantity`, ...) are
//! available on every kind. `purchase_subtotal` and `total` dispatch on the
//! kind, so a special sale always reports its discounted figures wherever it
//! is asked.
//!
//! ## Lifecycle
//! ```text
//!   Active { cart handle } ──── finalise() ────► Finalised { snapshot }
//!        │                                              │
//!   purchases() = live cart                    purchases() = snapshot
//!                                              customer cart emptied
//! ```
//!
//! ## Example
//! ```rust
//! use std::collections::HashMap;
//! use farm_core::{Barcode, Customer, Product, Quality, Transaction};
//!
//! let jack = Customer::new("Jack", 1234567, "1 Farm Lane").unwrap();
//! for barcode in [Barcode::Egg, Barcode::Milk, Barcode::Jam, Barcode::Egg, Barcode::Milk, Barcode::Egg] {
//!     jack.cart().add_product(Product::new(barcode, Quality::Regular));
//! }
//!
//! let discounts = HashMap::from([(Barcode::Milk, 50), (Barcode::Jam, 0)]);
//! let mut sale = Transaction::special_sale(jack.clone(), discounts);
//! sale.finalise().unwrap();
//!
//! assert_eq!(sale.purchase_quantity(Barcode::Egg), 3);
//! assert_eq!(sale.purchase_subtotal(Barcode::Milk).cents(), 60);
//! assert_eq!(sale.total().cents(), 510);
//! assert!(jack.cart().is_empty());
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::cart::SharedCart;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::{round_half_away, Money};
use crate::receipt::ReceiptPrinter;
use crate::types::{Barcode, Product};

// =============================================================================
// Kind and State
// =============================================================================

/// Which receipt and pricing rules a transaction follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Plain,
    Categorised,
    /// Percent off per barcode. Values are not range-checked.
    SpecialSale { discounts: BTreeMap<Barcode, i64> },
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Plain => "plain",
            TransactionKind::Categorised => "categorised",
            TransactionKind::SpecialSale { .. } => "special sale",
        }
    }
}

#[derive(Debug, Clone)]
enum PurchaseState {
    /// Purchases are whatever is in this cart right now.
    Active { cart: SharedCart },
    /// Purchases were locked in at `finalised_at`.
    Finalised {
        purchases: Vec<Product>,
        finalised_at: DateTime<Utc>,
    },
}

// =============================================================================
// Transaction
// =============================================================================

/// A customer's purchase, active or finalised.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: Uuid,
    customer: Customer,
    kind: TransactionKind,
    state: PurchaseState,
    opened_at: DateTime<Utc>,
}

impl Transaction {
    fn open(customer: Customer, kind: TransactionKind) -> Self {
        let cart = customer.cart().clone();
        Transaction {
            id: Uuid::new_v4(),
            customer,
            kind,
            state: PurchaseState::Active { cart },
            opened_at: Utc::now(),
        }
    }

    /// Opens a plain transaction.
    pub fn new(customer: Customer) -> Self {
        Transaction::open(customer, TransactionKind::Plain)
    }

    /// Opens a categorised transaction.
    pub fn categorised(customer: Customer) -> Self {
        Transaction::open(customer, TransactionKind::Categorised)
    }

    /// Opens a special-sale transaction. The discounts are copied in, so
    /// later changes to the caller's map do not affect the sale.
    pub fn special_sale<I>(customer: Customer, discounts: I) -> Self
    where
        I: IntoIterator<Item = (Barcode, i64)>,
    {
        let discounts = discounts.into_iter().collect();
        Transaction::open(customer, TransactionKind::SpecialSale { discounts })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    /// The customer who is (or was) shopping.
    pub fn associated_customer(&self) -> &Customer {
        &self.customer
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn finalised_at(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            PurchaseState::Active { .. } => None,
            PurchaseState::Finalised { finalised_at, .. } => Some(*finalised_at),
        }
    }

    pub fn is_finalised(&self) -> bool {
        matches!(self.state, PurchaseState::Finalised { .. })
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Locks the purchases in and empties the customer's cart.
    ///
    /// Errors with `TransactionFinalised` if called a second time; the
    /// snapshot taken the first time is kept.
    pub fn finalise(&mut self) -> CoreResult<()> {
        let purchases = match &self.state {
            PurchaseState::Active { cart } => cart.take_contents(),
            PurchaseState::Finalised { .. } => return Err(CoreError::TransactionFinalised),
        };
        self.state = PurchaseState::Finalised {
            purchases,
            finalised_at: Utc::now(),
        };
        Ok(())
    }

    /// Handle to the live cart while active.
    pub(crate) fn active_cart(&self) -> Option<&SharedCart> {
        match &self.state {
            PurchaseState::Active { cart } => Some(cart),
            PurchaseState::Finalised { .. } => None,
        }
    }

    // -------------------------------------------------------------------------
    // Purchases
    // -------------------------------------------------------------------------

    /// Copy of the purchases: the live cart while active, the snapshot after.
    pub fn purchases(&self) -> Vec<Product> {
        match &self.state {
            PurchaseState::Active { cart } => cart.contents(),
            PurchaseState::Finalised { purchases, .. } => purchases.clone(),
        }
    }

    /// Distinct barcodes purchased, in catalog order.
    pub fn purchased_types(&self) -> BTreeSet<Barcode> {
        self.purchases().iter().map(Product::barcode).collect()
    }

    /// Purchases grouped by barcode. Barcodes with no purchases are absent.
    pub fn purchases_by_type(&self) -> BTreeMap<Barcode, Vec<Product>> {
        let mut grouped: BTreeMap<Barcode, Vec<Product>> = BTreeMap::new();
        for product in self.purchases() {
            grouped.entry(product.barcode()).or_default().push(product);
        }
        grouped
    }

    pub fn purchase_quantity(&self, barcode: Barcode) -> usize {
        self.purchases()
            .iter()
            .filter(|p| p.barcode() == barcode)
            .count()
    }

    /// Sum of base prices for `barcode`, ignoring any discount.
    pub fn undiscounted_subtotal(&self, barcode: Barcode) -> Money {
        self.purchases()
            .iter()
            .filter(|p| p.barcode() == barcode)
            .map(Product::base_price)
            .sum()
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Percent off `barcode`; 0 unless this is a special sale with an entry.
    pub fn discount_amount(&self, barcode: Barcode) -> i64 {
        match &self.kind {
            TransactionKind::SpecialSale { discounts } => {
                discounts.get(&barcode).copied().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Subtotal for `barcode` as charged. Special sales round the discounted
    /// amount to the nearest cent, half away from zero.
    pub fn purchase_subtotal(&self, barcode: Barcode) -> Money {
        let subtotal = self.undiscounted_subtotal(barcode);
        match &self.kind {
            TransactionKind::SpecialSale { .. } => {
                subtotal.apply_percentage_discount(self.discount_amount(barcode))
            }
            _ => subtotal,
        }
    }

    /// Amount charged for the whole transaction.
    pub fn total(&self) -> Money {
        match &self.kind {
            TransactionKind::SpecialSale { .. } => self
                .purchased_types()
                .into_iter()
                .map(|barcode| self.purchase_subtotal(barcode))
                .sum(),
            _ => self.purchases().iter().map(Product::base_price).sum(),
        }
    }

    /// Money saved through discounts. Exact per-barcode savings are summed
    /// before rounding once to the nearest cent, saturating at the `i64`
    /// range for absurd percentages.
    pub fn total_saved(&self) -> Money {
        let TransactionKind::SpecialSale { discounts } = &self.kind else {
            return Money::zero();
        };
        let exact = self
            .purchased_types()
            .into_iter()
            .filter_map(|barcode| {
                discounts.get(&barcode).map(|&percent| {
                    (self.undiscounted_subtotal(barcode).cents() as i128)
                        .saturating_mul(percent as i128)
                })
            })
            .fold(0i128, i128::saturating_add);
        Money::from_cents(round_half_away(exact, 100))
    }

    // -------------------------------------------------------------------------
    // Receipts
    // -------------------------------------------------------------------------

    /// Receipt on the default paper width.
    pub fn receipt(&self) -> String {
        self.receipt_with(&ReceiptPrinter::default())
    }

    /// Receipt laid out by `printer`. Active transactions get the
    /// in-progress placeholder.
    pub fn receipt_with(&self, printer: &ReceiptPrinter) -> String {
        let PurchaseState::Finalised { purchases, .. } = &self.state else {
            return printer.create_active_receipt();
        };

        match &self.kind {
            TransactionKind::Plain => {
                let rows: Vec<Vec<String>> = purchases
                    .iter()
                    .map(|p| vec![p.display_name().to_string(), p.base_price().to_string()])
                    .collect();
                printer.create_receipt(
                    &["Item", "Price"],
                    &rows,
                    &self.total().to_string(),
                    self.customer.name(),
                    None,
                )
            }
            TransactionKind::Categorised | TransactionKind::SpecialSale { .. } => {
                self.categorised_receipt(printer)
            }
        }
    }

    fn categorised_receipt(&self, printer: &ReceiptPrinter) -> String {
        let rows: Vec<Vec<String>> = self
            .purchased_types()
            .into_iter()
            .map(|barcode| {
                let mut row = vec![
                    barcode.display_name().to_string(),
                    self.purchase_quantity(barcode).to_string(),
                    barcode.base_price().to_string(),
                    self.purchase_subtotal(barcode).to_string(),
                ];
                let percent = self.discount_amount(barcode);
                if percent > 0 {
                    row.push(format!(
                        "Discount applied! {}% off {}",
                        percent,
                        barcode.display_name()
                    ));
                }
                row
            })
            .collect();

        let saved = self.total_saved();
        let saved = saved.is_positive().then(|| saved.to_string());

        printer.create_receipt(
            &["Item", "Qty", "Price (ea.)", "Subtotal"],
            &rows,
            &self.total().to_string(),
            self.customer.name(),
            saved.as_deref(),
        )
    }
}

/// `Transaction {Customer: Jack | Phone Number: .. | Address: .., Status: Active, Associated Products: [..]}`
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_finalised() { "Finalised" } else { "Active" };
        let products: Vec<String> = self.purchases().iter().map(ToString::to_string).collect();
        let customer = self.customer.to_string();
        let customer = customer.strip_prefix("Name: ").unwrap_or(&customer);

        write!(
            f,
            "Transaction {{Customer: {}, Status: {}, Associated Products: [{}]",
            customer,
            status,
            products.join(", ")
        )?;

        if let TransactionKind::SpecialSale { discounts } = &self.kind {
            let purchased = self.purchased_types();
            let used: Vec<String> = discounts
                .iter()
                .filter(|(barcode, _)| purchased.contains(*barcode))
                .map(|(barcode, percent)| format!("{}: {}%", barcode, percent))
                .collect();
            write!(f, ", Discounts: [{}]", used.join(", "))?;
        }

        write!(f, "}}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quality;

    fn jack() -> Customer {
        Customer::new("Jack", 1234567, "1 Farm Lane").unwrap()
    }

    fn fill(customer: &Customer, barcodes: &[Barcode]) {
        for &barcode in barcodes {
            customer
                .cart()
                .add_product(Product::new(barcode, Quality::Regular));
        }
    }

    const JACKS_CART: [Barcode; 6] = [
        Barcode::Egg,
        Barcode::Milk,
        Barcode::Jam,
        Barcode::Egg,
        Barcode::Milk,
        Barcode::Egg,
    ];

    #[test]
    fn test_active_transaction_reads_live_cart() {
        let customer = jack();
        let transaction = Transaction::new(customer.clone());
        assert!(transaction.purchases().is_empty());

        fill(&customer, &[Barcode::Egg, Barcode::Jam]);
        assert_eq!(transaction.purchases().len(), 2);
        assert_eq!(transaction.total().cents(), 350);
        assert!(!transaction.is_finalised());
        assert!(transaction.finalised_at().is_none());
    }

    #[test]
    fn test_finalise_snapshots_and_clears_cart() {
        let customer = jack();
        let mut transaction = Transaction::new(customer.clone());
        fill(&customer, &[Barcode::Egg, Barcode::Milk]);
        assert!(transaction.finalised_at().is_none());

        transaction.finalise().unwrap();
        assert!(transaction.is_finalised());
        assert!(customer.cart().is_empty());
        assert!(transaction
            .finalised_at()
            .is_some_and(|at| at >= transaction.opened_at()));

        fill(&customer, &[Barcode::Wool, Barcode::Wool]);
        let purchases = transaction.purchases();
        assert_eq!(purchases.len(), 2);
        assert_eq!(purchases[0].barcode(), Barcode::Egg);
        assert_eq!(purchases[1].barcode(), Barcode::Milk);
    }

    #[test]
    fn test_finalise_twice_keeps_first_snapshot() {
        let customer = jack();
        let mut transaction = Transaction::new(customer.clone());
        fill(&customer, &[Barcode::Jam]);
        transaction.finalise().unwrap();

        assert_eq!(transaction.finalise(), Err(CoreError::TransactionFinalised));
        assert_eq!(transaction.purchases().len(), 1);
    }

    #[test]
    fn test_purchases_copy_cannot_mutate_transaction() {
        let customer = jack();
        let mut transaction = Transaction::new(customer.clone());
        fill(&customer, &[Barcode::Jam]);
        transaction.finalise().unwrap();

        let mut copy = transaction.purchases();
        copy.clear();
        assert_eq!(transaction.purchases().len(), 1);
    }

    #[test]
    fn test_empty_finalised_transaction() {
        let mut transaction = Transaction::new(jack());
        transaction.finalise().unwrap();

        assert!(transaction.purchases().is_empty());
        assert_eq!(transaction.total(), Money::zero());
        let receipt = transaction.receipt();
        assert!(receipt.lines().any(|l| l.starts_with("Total:") && l.ends_with("$0.00")));
    }

    #[test]
    fn test_grouping_views() {
        let customer = jack();
        let transaction = Transaction::categorised(customer.clone());
        fill(&customer, &JACKS_CART);

        let types: Vec<Barcode> = transaction.purchased_types().into_iter().collect();
        assert_eq!(types, vec![Barcode::Egg, Barcode::Milk, Barcode::Jam]);

        let grouped = transaction.purchases_by_type();
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[&Barcode::Egg].len(), 3);
        assert!(!grouped.contains_key(&Barcode::Wool));

        assert_eq!(transaction.purchase_quantity(Barcode::Milk), 2);
        assert_eq!(transaction.purchase_quantity(Barcode::Wool), 0);
        assert_eq!(transaction.purchase_subtotal(Barcode::Egg).cents(), 150);
        assert_eq!(transaction.purchase_subtotal(Barcode::Wool), Money::zero());
    }

    #[test]
    fn test_special_sale_scenario() {
        let customer = jack();
        let mut sale = Transaction::special_sale(
            customer.clone(),
            [(Barcode::Milk, 50), (Barcode::Jam, 0)],
        );
        fill(&customer, &JACKS_CART);
        sale.finalise().unwrap();

        assert_eq!(sale.purchase_quantity(Barcode::Egg), 3);
        assert_eq!(sale.purchase_subtotal(Barcode::Milk).cents(), 60);
        assert_eq!(sale.total().cents(), 510);
        assert_eq!(sale.total_saved().cents(), 60);
        assert_eq!(sale.discount_amount(Barcode::Milk), 50);
        assert_eq!(sale.discount_amount(Barcode::Egg), 0);
    }

    #[test]
    fn test_special_sale_total_is_sum_of_discounted_subtotals() {
        let customer = jack();
        let sale = Transaction::special_sale(
            customer.clone(),
            [(Barcode::Egg, 15), (Barcode::Wool, 33)],
        );
        fill(&customer, &[Barcode::Egg, Barcode::Wool, Barcode::Milk]);

        let by_kind: Money = sale
            .purchased_types()
            .into_iter()
            .map(|b| sale.purchase_subtotal(b))
            .sum();
        assert_eq!(sale.total(), by_kind);
        // 50 * 0.85 = 42.5 → 43, 3000 * 0.67 = 2010, milk 60
        assert_eq!(sale.total().cents(), 43 + 2010 + 60);
    }

    #[test]
    fn test_discount_bounds_and_unvalidated_values() {
        let customer = jack();
        let sale = Transaction::special_sale(
            customer.clone(),
            [(Barcode::Egg, 100), (Barcode::Milk, 0), (Barcode::Jam, 150)],
        );
        fill(&customer, &[Barcode::Egg, Barcode::Milk, Barcode::Jam]);

        assert_eq!(sale.purchase_subtotal(Barcode::Egg), Money::zero());
        assert_eq!(
            sale.purchase_subtotal(Barcode::Milk),
            sale.undiscounted_subtotal(Barcode::Milk)
        );
        assert_eq!(sale.purchase_subtotal(Barcode::Jam).cents(), -150);
    }

    #[test]
    fn test_extreme_discounts_saturate() {
        let customer = jack();
        let sale = Transaction::special_sale(customer.clone(), [(Barcode::Wool, i64::MAX)]);
        fill(&customer, &[Barcode::Wool]);

        assert_eq!(sale.purchase_subtotal(Barcode::Wool).cents(), i64::MIN);
        assert_eq!(sale.total().cents(), i64::MIN);
        assert_eq!(sale.total_saved().cents(), i64::MAX);

        let customer = jack();
        let sale = Transaction::special_sale(
            customer.clone(),
            [
                (Barcode::Egg, i64::MAX),
                (Barcode::Milk, i64::MAX),
                (Barcode::Jam, i64::MIN),
                (Barcode::Wool, i64::MIN),
            ],
        );
        fill(&customer, &Barcode::ALL);

        assert_eq!(sale.purchase_subtotal(Barcode::Jam).cents(), i64::MAX);
        assert_eq!(sale.total_saved().cents(), i64::MIN);
        assert!(!sale.receipt().contains("Saved:"));
    }

    #[test]
    fn test_discount_for_absent_barcode_is_harmless() {
        let customer = jack();
        let sale = Transaction::special_sale(customer.clone(), [(Barcode::Wool, 90)]);
        fill(&customer, &[Barcode::Egg]);

        assert_eq!(sale.total().cents(), 50);
        assert_eq!(sale.total_saved(), Money::zero());
    }

    #[test]
    fn test_discounts_are_copied() {
        let mut discounts = BTreeMap::from([(Barcode::Egg, 10)]);
        let sale = Transaction::special_sale(jack(), discounts.clone());
        discounts.insert(Barcode::Egg, 90);
        assert_eq!(sale.discount_amount(Barcode::Egg), 10);
    }

    #[test]
    fn test_active_receipt_is_placeholder() {
        let customer = jack();
        let transaction = Transaction::categorised(customer.clone());
        fill(&customer, &[Barcode::Egg]);
        assert_eq!(
            transaction.receipt(),
            ReceiptPrinter::default().create_active_receipt()
        );
    }

    #[test]
    fn test_plain_receipt_lists_every_purchase_in_order() {
        let customer = jack();
        let mut transaction = Transaction::new(customer.clone());
        fill(&customer, &[Barcode::Milk, Barcode::Egg, Barcode::Milk]);
        transaction.finalise().unwrap();

        let receipt = transaction.receipt();
        let items: Vec<&str> = receipt
            .lines()
            .filter(|l| l.starts_with("Milk") || l.starts_with("Egg"))
            .collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].starts_with("Milk") && items[0].ends_with("$0.60"));
        assert!(items[1].starts_with("Egg"));
        assert!(receipt.contains("$1.70"));
        assert!(receipt.contains("Jack"));
    }

    #[test]
    fn test_categorised_receipt_uses_catalog_order() {
        let customer = jack();
        let mut transaction = Transaction::categorised(customer.clone());
        fill(&customer, &[Barcode::Wool, Barcode::Egg, Barcode::Egg]);
        transaction.finalise().unwrap();

        let receipt = transaction.receipt();
        let egg = receipt.find("\nEgg").unwrap();
        let wool = receipt.find("\nWool").unwrap();
        assert!(egg < wool);
        assert!(receipt.contains("Qty"));
        assert!(!receipt.contains("Saved:"));
    }

    #[test]
    fn test_special_sale_receipt_annotations() {
        let customer = jack();
        let mut sale = Transaction::special_sale(
            customer.clone(),
            [(Barcode::Milk, 50), (Barcode::Jam, 0)],
        );
        fill(&customer, &JACKS_CART);
        sale.finalise().unwrap();

        let receipt = sale.receipt();
        assert!(receipt.contains("Discount applied! 50% off Milk"));
        assert!(!receipt.contains("off Jam"));
        assert!(receipt.lines().any(|l| l.starts_with("Saved:") && l.ends_with("$0.60")));
        assert!(receipt.lines().any(|l| l.starts_with("Total:") && l.ends_with("$5.10")));
    }

    #[test]
    fn test_display() {
        let customer = jack();
        let sale = Transaction::special_sale(customer.clone(), [(Barcode::Egg, 20), (Barcode::Jam, 5)]);
        fill(&customer, &[Barcode::Egg]);

        assert_eq!(
            sale.to_string(),
            "Transaction {Customer: Jack | Phone Number: 1234567 | Address: 1 Farm Lane, \
             Status: Active, Associated Products: [Egg: 50c *REGULAR*], Discounts: [Egg: 20%]}"
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn barcode() -> impl Strategy<Value = Barcode> {
            prop::sample::select(Barcode::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn test_charged_plus_saved_matches_list_price(
                cart in prop::collection::vec(barcode(), 0..30),
                discounts in prop::collection::btree_map(barcode(), 0i64..=100, 0..4),
            ) {
                let customer = jack();
                fill(&customer, &cart);
                let sale = Transaction::special_sale(customer, discounts);

                let list_price: i64 = cart.iter().map(|b| b.base_price().cents()).sum();
                let charged = sale.total().cents();
                let saved = sale.total_saved().cents();

                // one rounding per purchased kind plus one for the savings
                let slack = sale.purchased_types().len() as i64 + 1;
                prop_assert!((charged + saved - list_price).abs() <= slack);
                prop_assert!(charged <= list_price);
            }

            #[test]
            fn test_quantities_account_for_every_purchase(
                cart in prop::collection::vec(barcode(), 0..30),
            ) {
                let customer = jack();
                let mut transaction = Transaction::categorised(customer.clone());
                fill(&customer, &cart);
                transaction.finalise().unwrap();

                let counted: usize = Barcode::ALL
                    .iter()
                    .map(|&b| transaction.purchase_quantity(b))
                    .sum();
                prop_assert_eq!(counted, cart.len());
                prop_assert!(customer.cart().is_empty());

                fill(&customer, &cart);
                prop_assert_eq!(transaction.purchases().len(), cart.len());
            }
        }
    }
}
