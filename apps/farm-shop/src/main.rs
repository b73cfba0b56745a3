//! # Farm Shop
//!
//! Text-menu front end for the farm shop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Startup                                          │
//! │                                                                         │
//! │  flags ──► tracing (stderr) ──► ShopConfig (env + flags)                │
//! │                                        │                                │
//! │                                        ▼                                │
//! │              Farm { Basic | Fancy inventory, ReceiptPrinter }           │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                          Shop (stdin ──► stdout)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod logging;
mod shop;

use std::io;

use anyhow::Context;
use clap::Parser;
use farm_core::{AddressBook, BasicInventory, FancyInventory, Farm, Inventory, ReceiptPrinter};
use tracing::info;

use crate::config::ShopConfig;
use crate::shop::Shop;

/// Run the farm shop from the terminal.
#[derive(Debug, Parser)]
#[command(name = "farm-shop", version)]
struct Args {
    /// Name shown in the welcome banner (overrides FARM_SHOP_NAME)
    #[arg(long)]
    shop_name: Option<String>,

    /// Receipt width in columns (overrides FARM_RECEIPT_WIDTH)
    #[arg(long, short = 'w')]
    receipt_width: Option<usize>,

    /// Stock and sell products in quantities
    #[arg(long)]
    fancy: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let config = ShopConfig::from_env()
        .context("failed to load configuration from the environment")?
        .with_overrides(args.shop_name, args.receipt_width, args.fancy)
        .context("invalid command line option")?;
    info!(
        shop = %config.shop_name,
        receipt_width = config.receipt_width,
        fancy_inventory = config.fancy_inventory,
        "configuration loaded"
    );

    let printer = ReceiptPrinter::new(config.receipt_width).context("invalid receipt width")?;
    let inventory: Box<dyn Inventory> = if config.fancy_inventory {
        Box::new(FancyInventory::new())
    } else {
        Box::new(BasicInventory::new())
    };
    let farm = Farm::new(inventory, AddressBook::new()).with_printer(printer);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shop = Shop::new(farm, &config, stdin.lock(), stdout.lock());
    shop.run().context("shop front I/O failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_flags() {
        let args = Args::parse_from(["farm-shop", "--fancy", "-w", "60", "-vv"]);
        assert!(args.fancy);
        assert_eq!(args.receipt_width, Some(60));
        assert_eq!(args.verbose, 2);
        assert!(args.shop_name.is_none());
    }
}
