//! Deposit policy configuration
//!
//! The fee rate is not configurable; it lives in [`crate::fees`] as a constant.

use crate::amount::Amount;
use crate::balance::DEFAULT_ESTIMATED_GAS;
use crate::deposit::{MIN_DEPOSIT, MIN_PRINCIPAL};
use crate::error::AmountError;
use crate::fees::FeeQuote;
use crate::format::{format_amount, format_fixed, parse_units, FormattedQuote};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming the policy file
pub const POLICY_PATH_ENV: &str = "ETHERNITY_POLICY";

const DEFAULT_POLICY_PATH: &str = "deposit-policy.toml";

/// Fee warning threshold: 100 USDC (6 decimals)
const DEFAULT_FEE_WARNING_THRESHOLD: u64 = 100 * 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositPolicy {
    /// Decimals of the deposit token (USDC = 6)
    pub token_decimals: u8,

    /// Decimals of the native gas token (ETH = 18)
    pub gas_decimals: u8,

    /// Smallest accepted deposit, in token smallest units
    pub min_deposit: Amount,

    /// Largest accepted deposit, if capped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_deposit: Option<Amount>,

    /// Smallest principal for plans that require one
    pub min_principal: Amount,

    /// Warn the user when a single fee exceeds this
    pub fee_warning_threshold: Amount,

    /// Gas reserve used when the caller has no fresh estimate
    pub default_estimated_gas: Amount,
}

impl Default for DepositPolicy {
    fn default() -> Self {
        Self {
            token_decimals: 6,
            gas_decimals: 18,
            min_deposit: Amount::from(MIN_DEPOSIT),
            max_deposit: None,
            min_principal: Amount::from(MIN_PRINCIPAL),
            fee_warning_threshold: Amount::from(DEFAULT_FEE_WARNING_THRESHOLD),
            default_estimated_gas: Amount::from(DEFAULT_ESTIMATED_GAS),
        }
    }
}

impl DepositPolicy {
    /// Load policy from the TOML file named by `ETHERNITY_POLICY`
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::policy_path())
    }

    /// Load policy from a TOML file
    pub fn load_from(path: &str) -> Result<Self> {
        let policy_str = std::fs::read_to_string(path)
            .context(format!("Failed to read policy file: {}", path))?;

        let policy = Self::from_toml_str(&policy_str)?;
        log::info!("Loaded deposit policy from {}", path);
        Ok(policy)
    }

    /// Path named by `ETHERNITY_POLICY`, or `deposit-policy.toml`
    pub fn policy_path() -> String {
        std::env::var(POLICY_PATH_ENV).unwrap_or_else(|_| DEFAULT_POLICY_PATH.to_string())
    }

    /// Load policy from the configured path, falling back to the defaults
    pub fn load_or_default() -> Self {
        Self::load_from_or_default(&Self::policy_path())
    }

    /// Load policy from `path`, falling back to the defaults when the file is unusable
    pub fn load_from_or_default(path: &str) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("Failed to load deposit policy ({:#}), using defaults", e);
            Self::default()
        })
    }

    /// Parse policy TOML; missing keys take their default values
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let policy: DepositPolicy = toml::from_str(s)
            .context("Failed to parse deposit policy TOML")?;

        if let Some(max) = policy.max_deposit {
            anyhow::ensure!(
                max >= policy.min_deposit,
                "max_deposit {} is below min_deposit {}",
                max,
                policy.min_deposit
            );
        }
        Ok(policy)
    }

    /// Deposit-token amount for display, e.g. `"1,000.5"`
    pub fn format_token(&self, amount: Amount) -> String {
        format_amount(amount, self.token_decimals)
    }

    /// Gas amount for display, rounded to `places` fraction digits
    pub fn format_gas(&self, amount: Amount, places: u8) -> String {
        format_fixed(amount, self.gas_decimals, places)
    }

    /// Parse a deposit-token amount typed by the user
    pub fn parse_token(&self, input: &str) -> std::result::Result<Amount, AmountError> {
        parse_units(input, self.token_decimals)
    }

    /// Parse a gas amount typed by the user
    pub fn parse_gas(&self, input: &str) -> std::result::Result<Amount, AmountError> {
        parse_units(input, self.gas_decimals)
    }

    /// Fee quote rendered in the deposit token's decimals
    pub fn format_quote(&self, quote: &FeeQuote) -> FormattedQuote {
        quote.formatted(self.token_decimals)
    }

    /// Write the default policy to a file
    pub fn write_default(path: &str) -> Result<()> {
        let toml_str = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize deposit policy")?;

        std::fs::write(path, toml_str)
            .context(format!("Failed to write policy to {}", path))?;

        log::info!("Created default deposit policy at {}", path);
        Ok(())
    }
}
