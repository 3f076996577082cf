//! Proportional deposit fee (3%) over gross amounts
//!
//! The fee is always taken from the gross amount the user transfers:
//! - fee  = floor(gross * 300 / 10_000)
//! - net  = gross - fee
//! - gross_from_net(net) = floor(net * 10_000 / 9_700)

use crate::amount::Amount;
use crate::error::{AmountError, Result};
use crate::math::mul_div_floor;
use serde::{Deserialize, Serialize};

/// Fee in basis points (300 bps = 3%)
pub const FEE_BASIS_POINTS: u64 = 300;

/// Basis points scale (10,000 bps = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Whole-percent form of the fee, for display
pub const FEE_PERCENTAGE: u64 = 3;

/// Share of the gross that reaches the fund, in bps
const NET_BASIS_POINTS: u64 = BPS_DENOMINATOR - FEE_BASIS_POINTS;

/// Fee charged on `gross`, truncated toward zero
pub fn fee_of(gross: Amount) -> Amount {
    let fee = mul_div_floor(gross.as_u256(), FEE_BASIS_POINTS, BPS_DENOMINATOR);
    // fee <= gross, so the shrinking product always fits and None is unreachable
    debug_assert!(fee.is_some(), "fee of {} does not fit in 256 bits", gross);
    Amount::from_u256(fee.unwrap_or(gross.as_u256()))
}

/// Amount left after the fee. Never exceeds `gross`.
pub fn net_of(gross: Amount) -> Amount {
    gross.saturating_sub(fee_of(gross))
}

/// Gross amount to send so that at least `net` lands after the fee.
///
/// This solves the fee formula for gross while ignoring the truncation in
/// [`fee_of`], so it is an upper-bound inverse: `net_of(gross_from_net(n)) >= n`.
/// Callers sizing a deposit must use this form so they never under-deposit.
///
/// Fails only when the gross would not fit in 256 bits.
pub fn gross_from_net(net: Amount) -> Result<Amount> {
    mul_div_floor(net.as_u256(), BPS_DENOMINATOR, NET_BASIS_POINTS)
        .map(Amount::from_u256)
        .ok_or(AmountError::Overflow)
}

/// Fee breakdown for a single transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub gross: Amount,
    pub fee: Amount,
    pub net: Amount,
    pub fee_bps: u64,
}

/// Quote the fee for one gross amount
pub fn quote(gross: Amount) -> FeeQuote {
    let fee = fee_of(gross);
    FeeQuote {
        gross,
        fee,
        net: gross.saturating_sub(fee),
        fee_bps: FEE_BASIS_POINTS,
    }
}
