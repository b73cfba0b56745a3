//! Tracing setup.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages from everything
//! - `RUST_LOG=farm_shop=trace` - Show trace for the shop only
//! - Default: `warn`, raised for `farm_shop` by each `-v`
//!
//! Events go to stderr so they never mix with receipts on stdout.

use tracing_subscriber::EnvFilter;

const BIN_TARGET: &str = "farm_shop";

pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();
}

fn default_directives(verbosity: u8) -> String {
    format!("warn,{}={}", BIN_TARGET, max_level(verbosity))
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
