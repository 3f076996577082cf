//! Pre-flight balance checks for a deposit

use crate::amount::Amount;
use crate::deposit::{deposit_breakdown, DepositBreakdown};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default native-token reserve for gas: 0.001 ETH in wei
pub const DEFAULT_ESTIMATED_GAS: u64 = 1_000_000_000_000_000;

/// What the user must hold before signing the deposit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredBalances {
    pub breakdown: DepositBreakdown,
    /// Stablecoin needed: the total gross of both legs
    pub usdc_required: Amount,
    /// Native token needed for gas, as estimated by the caller
    pub gas_required: Amount,
}

/// Outcome of comparing the user's holdings with [`RequiredBalances`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceValidation {
    pub has_enough_usdc: bool,
    pub has_enough_gas: bool,
    pub usdc_shortfall: Amount,
    pub gas_shortfall: Amount,
    pub is_valid: bool,
}

/// Required balances for a two-leg deposit.
///
/// Gas is not estimated here; `estimated_gas` is passed through unchanged
/// (use [`DEFAULT_ESTIMATED_GAS`] when no estimate is available).
pub fn required_balances(
    initial_gross: Amount,
    monthly_gross: Amount,
    estimated_gas: Amount,
) -> Result<RequiredBalances> {
    let breakdown = deposit_breakdown(initial_gross, monthly_gross)?;
    Ok(RequiredBalances {
        usdc_required: breakdown.total_gross,
        gas_required: estimated_gas,
        breakdown,
    })
}

/// Compare balances against requirements
pub fn validate_balance(
    user_usdc_balance: Amount,
    user_gas_balance: Amount,
    required: &RequiredBalances,
) -> BalanceValidation {
    let has_enough_usdc = user_usdc_balance >= required.usdc_required;
    let has_enough_gas = user_gas_balance >= required.gas_required;

    BalanceValidation {
        has_enough_usdc,
        has_enough_gas,
        usdc_shortfall: shortfall(user_usdc_balance, required.usdc_required),
        gas_shortfall: shortfall(user_gas_balance, required.gas_required),
        is_valid: has_enough_usdc && has_enough_gas,
    }
}

/// How far `balance` falls short of `required` (0 when sufficient)
pub fn shortfall(balance: Amount, required: Amount) -> Amount {
    required.saturating_sub(balance)
}

/// Whether the token allowance must be raised before the deposit.
/// A missing allowance (not yet read) always needs approval.
pub fn needs_approval(current_allowance: Option<Amount>, required: Amount) -> bool {
    match current_allowance {
        Some(allowance) => allowance < required,
        None => true,
    }
}
