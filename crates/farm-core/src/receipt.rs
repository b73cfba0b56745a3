//! # Receipt Printer
//!
//! Lays tabular receipt data out as fixed-width text.
//!
//! ## Layout
//! ```text
//! ==========================================
//! Item             Qty  Price (ea.)  Subtotal
//! ------------------------------------------
//! Egg                3        $0.50     $1.50
//! Milk               2        $0.60     $0.60
//!     Discount applied! 50% off Milk
//! ------------------------------------------
//! Total:                                $2.10
//! Saved:                                $0.60
//! ------------------------------------------
//!        Thank you for visiting, Jack!
//! ==========================================
//! ```
//!
//! The printer knows nothing about transactions. Callers hand it headings,
//! rows of already-formatted cells, and the footer figures. Any cell past the
//! number of headings is printed as an indented note under its row.

use crate::error::CoreResult;
use crate::validation::validate_receipt_width;
use crate::DEFAULT_RECEIPT_WIDTH;

const NOTE_INDENT: &str = "    ";

/// Fixed-width receipt formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPrinter {
    width: usize,
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        ReceiptPrinter {
            width: DEFAULT_RECEIPT_WIDTH,
        }
    }
}

impl ReceiptPrinter {
    /// Creates a printer for paper `width` columns wide.
    pub fn new(width: usize) -> CoreResult<Self> {
        validate_receipt_width(width)?;
        Ok(ReceiptPrinter { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Placeholder shown while a transaction is still open.
    pub fn create_active_receipt(&self) -> String {
        let mut out = String::new();
        self.rule(&mut out, '=');
        self.centered(&mut out, "Transaction in progress...");
        self.centered(&mut out, "Check out to print a receipt.");
        self.rule(&mut out, '=');
        out
    }

    /// Formats a complete receipt.
    ///
    /// ## Arguments
    /// * `headings` - Column titles; the first column is left aligned, the
    ///   rest right aligned
    /// * `rows` - One entry per line item, cells already formatted
    /// * `total` - Grand total, already formatted
    /// * `customer_name` - Printed in the sign-off
    /// * `saved` - Savings line, printed only when present
    ///
    /// ## Example
    /// ```rust
    /// use farm_core::ReceiptPrinter;
    ///
    /// let receipt = ReceiptPrinter::default().create_receipt(
    ///     &["Item", "Price"],
    ///     &[vec!["Egg".to_string(), "$0.50".to_string()]],
    ///     "$0.50",
    ///     "Jack",
    ///     None,
    /// );
    /// assert!(receipt.contains("Egg"));
    /// assert!(receipt.contains("Jack"));
    /// assert!(!receipt.contains("Saved"));
    /// ```
    pub fn create_receipt<S: AsRef<str>>(
        &self,
        headings: &[S],
        rows: &[Vec<String>],
        total: &str,
        customer_name: &str,
        saved: Option<&str>,
    ) -> String {
        let columns = headings.len().max(1);
        let mut out = String::new();

        self.rule(&mut out, '=');
        let titles: Vec<&str> = headings.iter().map(AsRef::as_ref).collect();
        self.table_line(&mut out, &titles, columns);
        self.rule(&mut out, '-');

        for row in rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            let (shown, notes) = cells.split_at(cells.len().min(columns));
            self.table_line(&mut out, shown, columns);
            for note in notes {
                out.push_str(NOTE_INDENT);
                out.push_str(note);
                out.push('\n');
            }
        }

        self.rule(&mut out, '-');
        self.justified(&mut out, "Total:", total);
        if let Some(saved) = saved {
            self.justified(&mut out, "Saved:", saved);
        }
        self.rule(&mut out, '-');
        self.centered(&mut out, &format!("Thank you for visiting, {}!", customer_name));
        self.rule(&mut out, '=');
        out
    }

    fn rule(&self, out: &mut String, ch: char) {
        out.extend(std::iter::repeat(ch).take(self.width));
        out.push('\n');
    }

    fn centered(&self, out: &mut String, text: &str) {
        let line = format!("{:^width$}", text, width = self.width);
        out.push_str(line.trim_end());
        out.push('\n');
    }

    fn justified(&self, out: &mut String, left: &str, right: &str) {
        let gap = self
            .width
            .saturating_sub(left.chars().count() + right.chars().count())
            .max(1);
        out.push_str(left);
        out.extend(std::iter::repeat(' ').take(gap));
        out.push_str(right);
        out.push('\n');
    }

    /// First column takes the slack; the others share the width evenly.
    fn table_line(&self, out: &mut String, cells: &[&str], columns: usize) {
        let column_width = self.width / columns;
        let first_width = self.width - column_width * (columns - 1);

        let mut line = String::with_capacity(self.width);
        for index in 0..columns {
            let cell = cells.get(index).copied().unwrap_or("");
            if index == 0 {
                line.push_str(&format!("{:<w$}", cell, w = first_width));
            } else {
                line.push_str(&format!("{:>w$}", cell, w = column_width));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_new_validates_width() {
        assert_eq!(ReceiptPrinter::new(48).unwrap().width(), 48);
        assert!(ReceiptPrinter::new(5).is_err());
        assert_eq!(ReceiptPrinter::default().width(), DEFAULT_RECEIPT_WIDTH);
    }

    #[test]
    fn test_active_receipt_is_fixed_placeholder() {
        let printer = ReceiptPrinter::default();
        let receipt = printer.create_active_receipt();
        assert!(receipt.contains("Transaction in progress"));
        assert_eq!(receipt, printer.create_active_receipt());
    }

    #[test]
    fn test_receipt_lines_fit_width() {
        let printer = ReceiptPrinter::new(40).unwrap();
        let receipt = printer.create_receipt(
            &["Item", "Price"],
            &[row(&["Egg", "$0.50"]), row(&["Jam", "$3.00"])],
            "$3.50",
            "Jack",
            None,
        );

        for line in receipt.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {:?}", line);
        }
        let egg_line = receipt.lines().find(|l| l.starts_with("Egg")).unwrap();
        assert!(egg_line.ends_with("$0.50"));
        assert_eq!(egg_line.chars().count(), 40);
    }

    #[test]
    fn test_extra_cells_become_notes() {
        let receipt = ReceiptPrinter::default().create_receipt(
            &["Item", "Subtotal"],
            &[row(&["Milk", "$0.60", "Discount applied! 50% off Milk"])],
            "$0.60",
            "Jack",
            Some("$0.60"),
        );

        let lines: Vec<&str> = receipt.lines().collect();
        let milk = lines.iter().position(|l| l.starts_with("Milk")).unwrap();
        assert_eq!(lines[milk + 1], "    Discount applied! 50% off Milk");
        assert!(receipt.contains("Saved:"));
    }

    #[test]
    fn test_empty_receipt_still_has_total_and_name() {
        let receipt =
            ReceiptPrinter::default().create_receipt(&["Item", "Price"], &[], "$0.00", "Jill", None);
        assert!(receipt.lines().any(|l| l.starts_with("Total:") && l.ends_with("$0.00")));
        assert!(receipt.contains("Jill"));
    }
}
