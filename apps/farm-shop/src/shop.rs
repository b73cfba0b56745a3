//! # Shop Front
//!
//! Line-oriented text menu over any reader and writer.
//!
//! ```text
//! mode> inventory | address | sales | history | q
//!
//!   inventory> add <product> [quantity] | add -o | list | q
//!   address>   add | list | q
//!   sales>     start [-c | -s] | add <product> [quantity] | add -o | checkout | q
//!   history>   stats [product] | last | grossing | popular | q
//! ```
//!
//! Every farm error becomes a message to the shop keeper. Only I/O failures
//! end the session early, and end of input quits from any mode.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use farm_core::{Barcode, CoreError, Customer, Farm, Inventory, Quality, Transaction};
use tracing::{debug, info, warn};

use crate::config::ShopConfig;

/// Text menu driving a [`Farm`].
pub struct Shop<R, W> {
    farm: Farm,
    shop_name: String,
    quantities_enabled: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shop<R, W> {
    pub fn new(farm: Farm, config: &ShopConfig, input: R, output: W) -> Self {
        Shop {
            quantities_enabled: farm.inventory().supports_quantities(),
            farm,
            shop_name: config.shop_name.clone(),
            input,
            output,
        }
    }

    /// Hands back the farm and the writer once the session is over.
    pub fn into_parts(self) -> (Farm, W) {
        (self.farm, self.output)
    }

    /// Runs until `q` at the mode prompt or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let banner = format!("-*- WELCOME TO {} -*-", self.shop_name.to_uppercase());
        self.say(&banner)?;

        while let Some(command) = self.prompt("mode")? {
            let mode = command.to_lowercase();
            debug!(mode = %mode, "mode selected");
            match mode.as_str() {
                "q" => break,
                "inventory" => self.inventory_mode()?,
                "address" => self.address_mode()?,
                "sales" => self.sales_mode()?,
                "history" => self.history_mode()?,
                "" => {}
                other => self.say(&format!("Unknown mode: {}", other))?,
            }
        }

        info!(
            transactions = self.farm.transaction_history().total_transactions_made(),
            "shop closed"
        );
        Ok(())
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    fn inventory_mode(&mut self) -> io::Result<()> {
        while let Some(line) = self.prompt("inventory")? {
            let args = words(&line);
            match args.as_slice() {
                ["q"] => break,
                ["add", "-o"] => self.list_product_options()?,
                ["add", product] => self.stock(product, None)?,
                ["add", product, quantity] => self.stock(product, Some(*quantity))?,
                ["add", ..] => self.say("Incorrect number of arguments.")?,
                ["list"] => self.list_stock()?,
                [] => {}
                _ => self.say("Unknown inventory command.")?,
            }
        }
        Ok(())
    }

    fn stock(&mut self, product: &str, quantity: Option<&str>) -> io::Result<()> {
        let barcode = match product.parse::<Barcode>() {
            Ok(barcode) => barcode,
            Err(err) => return self.say(&format!("Failed to add product: {}", err)),
        };

        let result = match quantity {
            None => {
                self.farm.stock_product(barcode, Quality::Regular);
                Ok(())
            }
            Some(raw) => {
                if !self.quantities_enabled {
                    return self.say("Quantities are not supported by this inventory.");
                }
                let Some(quantity) = parse_quantity(raw) else {
                    return self.say("Invalid quantity.");
                };
                self.farm
                    .stock_product_quantity(barcode, Quality::Regular, quantity)
            }
        };

        match result {
            Ok(()) => {
                info!(barcode = %barcode, quantity = quantity.unwrap_or("1"), "stocked product");
                self.say("Product added to inventory.")
            }
            Err(err) => {
                warn!(barcode = %barcode, error = %err, "stocking failed");
                self.say(&format!("Failed to add product: {}", err))
            }
        }
    }

    fn list_stock(&mut self) -> io::Result<()> {
        let stock = self.farm.all_stock();
        if stock.is_empty() {
            return self.say("Inventory is empty.");
        }
        for row in stock.chunks(4) {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            self.say(&line.join(",\t"))?;
        }
        Ok(())
    }

    fn list_product_options(&mut self) -> io::Result<()> {
        for barcode in Barcode::ALL {
            self.say(&barcode.display_name().to_lowercase())?;
        }
        Ok(())
    }

    // =========================================================================
    // Address Book
    // =========================================================================

    fn address_mode(&mut self) -> io::Result<()> {
        while let Some(line) = self.prompt("address")? {
            match words(&line).as_slice() {
                ["q"] => break,
                ["add"] => self.create_customer()?,
                ["list"] => {
                    let customers = self.farm.all_customers();
                    if customers.is_empty() {
                        self.say("Address book is empty.")?;
                    }
                    for customer in customers {
                        self.say(&customer.to_string())?;
                    }
                }
                [] => {}
                _ => self.say("Unknown address book command.")?,
            }
        }
        Ok(())
    }

    fn create_customer(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Customer name")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Customer address")? else {
            return Ok(());
        };
        let Some(phone_number) = self.prompt_phone_number()? else {
            return Ok(());
        };

        let customer = match Customer::new(&name, phone_number, &address) {
            Ok(customer) => customer,
            Err(err) => return self.say(&format!("Could not create customer: {}", err)),
        };

        match self.farm.save_customer(customer) {
            Ok(()) => {
                info!(customer = %name.trim(), phone_number, "customer saved");
                self.say("Customer saved.")
            }
            Err(CoreError::DuplicateCustomer(_)) => self.say("Customer already exists."),
            Err(err) => self.say(&format!("Could not save customer: {}", err)),
        }
    }

    // =========================================================================
    // Sales
    // =========================================================================

    fn sales_mode(&mut self) -> io::Result<()> {
        while let Some(line) = self.prompt("sales")? {
            match words(&line).as_slice() {
                ["q"] => {
                    if !self.farm.transaction_manager().has_ongoing_transaction() {
                        break;
                    }
                    self.say(
                        "You have a transaction in progress. Please check out before \
                         quitting sales mode or your inventory may be corrupted.",
                    )?;
                }
                ["start"] => self.start_transaction(None)?,
                ["start", flag] => self.start_transaction(Some(*flag))?,
                ["add", "-o"] => self.list_product_options()?,
                ["add", product] => self.add_to_cart(product, None)?,
                ["add", product, quantity] => self.add_to_cart(product, Some(*quantity))?,
                ["start", ..] | ["add", ..] => self.say("Incorrect number of arguments.")?,
                ["checkout"] => self.checkout()?,
                [] => {}
                _ => self.say("Unknown sales command.")?,
            }
        }

        if self.farm.transaction_manager().has_ongoing_transaction() {
            warn!("input ended with a transaction still open");
        }
        Ok(())
    }

    fn start_transaction(&mut self, flag: Option<&str>) -> io::Result<()> {
        if !matches!(
            flag,
            None | Some("-c" | "-categorised" | "-s" | "-specialsale")
        ) {
            return self.say("Unknown transaction type. Use -c or -s.");
        }

        let Some(name) = self.prompt("Customer name")? else {
            return Ok(());
        };
        let Some(phone_number) = self.prompt_phone_number()? else {
            return Ok(());
        };
        let customer = match self.farm.get_customer(name.trim(), phone_number) {
            Ok(customer) => customer,
            Err(_) => return self.say("Customer not found."),
        };

        let transaction = match flag {
            Some("-s" | "-specialsale") => {
                let discounts = self.prompt_discounts()?;
                Transaction::special_sale(customer, discounts)
            }
            Some("-c" | "-categorised") => Transaction::categorised(customer),
            _ => Transaction::new(customer),
        };
        let kind = transaction.kind().label();
        let id = transaction.id();

        match self.farm.start_transaction(transaction) {
            Ok(()) => {
                info!(transaction_id = %id, kind, customer = %name.trim(), "transaction started");
                self.say("Transaction started.")
            }
            Err(err) => {
                warn!(error = %err, "transaction not started");
                self.say(&format!("Failed to start transaction: {}", err))
            }
        }
    }

    fn prompt_discounts(&mut self) -> io::Result<BTreeMap<Barcode, i64>> {
        self.say("Entering Discount Setting!")?;
        let mut discounts = BTreeMap::new();

        while let Some(product) = self.prompt("Product name (q to finish)")? {
            if product.eq_ignore_ascii_case("q") {
                break;
            }
            let Ok(barcode) = product.parse::<Barcode>() else {
                self.say("Please enter a valid product name.")?;
                continue;
            };
            let Some(raw) = self.prompt("Discount (%)")? else {
                break;
            };
            let Ok(percent) = raw.parse::<i32>().map(i64::from) else {
                self.say("Please enter a whole number.")?;
                continue;
            };
            if percent < 0 {
                break;
            }
            // a repeated product replaces its earlier discount
            discounts.insert(barcode, percent);
        }

        let entered: Vec<String> = discounts
            .iter()
            .map(|(barcode, percent)| format!("{}: {}%", barcode, percent))
            .collect();
        self.say(&format!("Discounts entered as follows: {{{}}}", entered.join(", ")))?;
        Ok(discounts)
    }

    fn add_to_cart(&mut self, product: &str, quantity: Option<&str>) -> io::Result<()> {
        let barcode = match product.parse::<Barcode>() {
            Ok(barcode) => barcode,
            Err(err) => return self.say(&err.to_string()),
        };

        let requested = match quantity {
            None => 1,
            Some(raw) => {
                if !self.quantities_enabled {
                    return self.say("Quantities are not supported by this inventory.");
                }
                match parse_quantity(raw) {
                    Some(quantity) => quantity,
                    None => return self.say("Invalid quantity."),
                }
            }
        };

        let result = match quantity {
            None => self.farm.add_to_cart(barcode),
            Some(_) => self.farm.add_to_cart_quantity(barcode, requested),
        };

        match result {
            Ok(added) => {
                info!(barcode = %barcode, requested, added, "added to cart");
                if self.quantities_enabled && (added as i64) < requested && added > 0 {
                    self.say(&format!(
                        "We only had {} {} to give you :(",
                        added,
                        barcode.display_name().to_lowercase()
                    ))
                } else if added > 0 {
                    self.say("Item/s added to cart")
                } else {
                    self.say("Sorry, that's out of stock!")
                }
            }
            Err(err) => {
                warn!(barcode = %barcode, error = %err, "add to cart failed");
                self.say(&format!("Product could not be added to transaction: {}", err))
            }
        }
    }

    fn checkout(&mut self) -> io::Result<()> {
        match self.farm.checkout() {
            Ok(true) => {
                if let Some(sale) = self.farm.transaction_history().last_transaction() {
                    info!(
                        transaction_id = %sale.id(),
                        customer = %sale.associated_customer().name(),
                        total = %sale.total(),
                        saved = %sale.total_saved(),
                        items = sale.purchases().len(),
                        opened_at = %sale.opened_at(),
                        finalised_at = ?sale.finalised_at(),
                        "checked out"
                    );
                }
                let receipt = self.farm.last_receipt().unwrap_or_default();
                self.print_receipt(&receipt)
            }
            Ok(false) => {
                info!("empty cart checked out");
                self.say("Thanks for stopping by!")
            }
            Err(err) => {
                warn!(error = %err, "checkout failed");
                self.say(&format!("Checkout request failed: {}", err))
            }
        }
    }

    // =========================================================================
    // History
    // =========================================================================

    fn history_mode(&mut self) -> io::Result<()> {
        while let Some(line) = self.prompt("history")? {
            match words(&line).as_slice() {
                ["q"] => break,
                ["stats"] => self.all_stats()?,
                ["stats", product] => self.product_stats(product)?,
                ["last"] => match self.farm.last_receipt() {
                    Some(receipt) => self.print_receipt(&receipt)?,
                    None => self.say("No transactions made!")?,
                },
                ["grossing"] => {
                    let history = self.farm.transaction_history();
                    let receipt = history
                        .highest_grossing_transaction()
                        .map(|t| t.receipt_with(self.farm.receipt_printer()));
                    let empty = history.total_transactions_made() == 0;
                    match receipt {
                        Some(receipt) => self.print_receipt(&receipt)?,
                        None if empty => self.say("No transactions made!")?,
                        None => self.say("No transaction has earned anything yet.")?,
                    }
                }
                ["popular"] => match self.farm.transaction_history().most_popular_product() {
                    Some(barcode) => {
                        self.say(&format!("{} is the most popular!!", barcode.display_name()))?
                    }
                    None => self.say("No products sold yet!")?,
                },
                [] => {}
                _ => self.say("Unknown history command.")?,
            }
        }
        Ok(())
    }

    fn all_stats(&mut self) -> io::Result<()> {
        let history = self.farm.transaction_history();
        let report = format!(
            "|--------------------------\n\
             |     Stats for all\n\
             | Total Transactions:  {}\n\
             | Average Sale Price:  {}\n\
             | Total Products Sold: {}\n\
             | Gross Earning        {}\n\
             |--------------------------",
            history.total_transactions_made(),
            dollars(history.average_spend_per_visit()),
            history.total_products_sold(),
            history.gross_earnings(),
        );
        self.say(&report)
    }

    fn product_stats(&mut self, product: &str) -> io::Result<()> {
        let barcode = match product.parse::<Barcode>() {
            Ok(barcode) => barcode,
            Err(err) => return self.say(&err.to_string()),
        };
        let history = self.farm.transaction_history();
        let report = format!(
            "|--------------------------\n\
             |     Stats for all\n\
             | Total Transactions:  {}\n\
             | Average Sale Price:  {}\n\
             |--------------------------\n\
             |     Stats for {}\n\
             | Total Products Sold: {}\n\
             | Gross Earning        {}\n\
             | Average Discount:    {} per item\n\
             |--------------------------",
            history.total_transactions_made(),
            dollars(history.average_spend_per_visit()),
            barcode.display_name(),
            history.total_products_sold_for(barcode),
            history.gross_earnings_for(barcode),
            dollars(history.average_product_discount(barcode)),
        );
        self.say(&report)
    }

    // =========================================================================
    // I/O helpers
    // =========================================================================

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn print_receipt(&mut self, receipt: &str) -> io::Result<()> {
        self.output.write_all(receipt.as_bytes())?;
        self.output.flush()
    }

    /// Writes `label> ` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}> ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_phone_number(&mut self) -> io::Result<Option<i64>> {
        let Some(raw) = self.prompt("Customer phone number")? else {
            return Ok(None);
        };
        match raw.parse::<i64>() {
            Ok(phone_number) => Ok(Some(phone_number)),
            Err(_) => {
                self.say("Invalid phone number.")?;
                Ok(None)
            }
        }
    }
}

fn words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn parse_quantity(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Cents as `$1.50`, for averages that are not whole cents.
fn dollars(cents: f64) -> String {
    format!("${:.2}", cents / 100.0)
}
