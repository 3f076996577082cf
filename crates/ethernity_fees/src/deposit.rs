//! Two-leg deposit (initial + first monthly) breakdown

use crate::amount::Amount;
use crate::error::Result;
use crate::fees::{fee_of, net_of};
use serde::{Deserialize, Serialize};

/// Minimum single deposit: 100 USDC (6 decimals)
pub const MIN_DEPOSIT: u64 = 100 * 1_000_000;

/// Minimum principal when a plan requires one: 1000 USDC (6 decimals)
pub const MIN_PRINCIPAL: u64 = 1000 * 1_000_000;

/// Years-to-retirement below which a principal is required
const PRINCIPAL_HORIZON_YEARS: u32 = 15;

/// Age from which a principal is required regardless of horizon
const PRINCIPAL_MIN_AGE: u32 = 40;

/// Gross, fee and net for the initial and monthly legs plus their totals.
///
/// Fees are truncated per leg, never on the combined gross, so `total_fees`
/// can be up to one unit per leg below `fee_of(total_gross)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositBreakdown {
    pub initial_gross: Amount,
    pub initial_fee: Amount,
    pub initial_net: Amount,

    pub monthly_gross: Amount,
    pub monthly_fee: Amount,
    pub monthly_net: Amount,

    pub total_gross: Amount,
    pub total_fees: Amount,
    pub total_net: Amount,
}

/// Break down a deposit made of an initial leg and the first monthly leg.
///
/// Fails only if the summed gross exceeds 256 bits; the fee and net totals
/// are bounded by it.
pub fn deposit_breakdown(
    initial_gross: Amount,
    monthly_gross: Amount,
) -> Result<DepositBreakdown> {
    let initial_fee = fee_of(initial_gross);
    let initial_net = net_of(initial_gross);
    let monthly_fee = fee_of(monthly_gross);
    let monthly_net = net_of(monthly_gross);

    let total_gross = initial_gross.checked_add(monthly_gross)?;
    let total_fees = initial_fee.checked_add(monthly_fee)?;
    let total_net = initial_net.checked_add(monthly_net)?;

    Ok(DepositBreakdown {
        initial_gross,
        initial_fee,
        initial_net,
        monthly_gross,
        monthly_fee,
        monthly_net,
        total_gross,
        total_fees,
        total_net,
    })
}

/// Whether a retirement plan must start with a principal deposit.
///
/// Short horizons (under 15 years) and savers aged 40+ need one.
pub fn should_have_principal(current_age: u32, retirement_age: u32) -> bool {
    let years_to_retirement = retirement_age.saturating_sub(current_age);
    years_to_retirement < PRINCIPAL_HORIZON_YEARS || current_age >= PRINCIPAL_MIN_AGE
}
