//! Ethernity Integration Tests
//!
//! Scenario tests that drive the fee accounting crate the way the deposit
//! flow does: parse user input, size the deposit, pre-flight the wallet.

pub use ethernity_fees;

use ethernity_fees::format::{parse_units, USDC_DECIMALS};
use ethernity_fees::Amount;

/// USDC smallest units (1e6 per token)
pub const USDC: u64 = 1_000_000;

/// Whole USDC tokens as an [`Amount`]
pub fn usdc(tokens: u64) -> Amount {
    Amount::from(tokens * USDC)
}

/// Parse a USDC string as typed by the user; panics on bad fixtures
pub fn usdc_str(input: &str) -> Amount {
    parse_units(input, USDC_DECIMALS).unwrap_or_else(|e| panic!("bad fixture {:?}: {}", input, e))
}

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
