//! Human-readable amounts for display and user input.
//!
//! Display strings are derived from [`Amount`] and never converted back into
//! accounting values; parse user input with [`parse_units`] instead.

use crate::amount::{pow10, Amount};
use crate::error::{AmountError, Result};
use crate::fees::{FeeQuote, FEE_PERCENTAGE};
use primitive_types::U256;
use serde::Serialize;

/// Decimals of the USDC deposit token
pub const USDC_DECIMALS: u8 = 6;

/// Split into (integer part, fractional part) at `decimals`.
/// Past 10^77 every U256 is below the scale, so the integer part is zero.
fn split(amount: U256, decimals: u8) -> (U256, U256) {
    match pow10(decimals) {
        Ok(scale) => (amount / scale, amount % scale),
        Err(_) => (U256::zero(), amount),
    }
}

/// Zero-pad the fractional part to `width` digits
fn pad_fraction(frac: U256, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    format!("{:0>width$}", frac.to_string(), width = width)
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn join(int: String, frac: &str) -> String {
    if frac.is_empty() {
        int
    } else {
        format!("{}.{}", int, frac)
    }
}

/// Exact decimal form with trailing zeros trimmed: `1000500000, 6 -> "1000.5"`
pub fn format_units(amount: Amount, decimals: u8) -> String {
    let (int, frac) = split(amount.as_u256(), decimals);
    let frac = pad_fraction(frac, decimals as usize);
    join(int.to_string(), frac.trim_end_matches('0'))
}

/// Exact decimal form with thousands grouping: `1000500000, 6 -> "1,000.5"`
pub fn format_amount(amount: Amount, decimals: u8) -> String {
    let (int, frac) = split(amount.as_u256(), decimals);
    let frac = pad_fraction(frac, decimals as usize);
    join(group_thousands(&int.to_string()), frac.trim_end_matches('0'))
}

/// Grouped form rounded half-up to `places` fraction digits: `"1,000.50"`
pub fn format_fixed(amount: Amount, decimals: u8, places: u8) -> String {
    let raw = amount.as_u256();

    // Re-express the amount with `places` decimals
    let scaled = if places >= decimals {
        match pow10(places - decimals) {
            Ok(up) => raw.checked_mul(up),
            Err(_) => None,
        }
    } else {
        let (q, r) = split(raw, decimals - places);
        let half_up = match pow10(decimals - places) {
            Ok(scale) => r.checked_mul(U256::from(2u64)).map_or(true, |r2| r2 >= scale),
            Err(_) => false,
        };
        // q <= MAX / 10 here, so the increment cannot overflow
        Some(if half_up { q + U256::one() } else { q })
    };

    match scaled {
        Some(scaled) => {
            let (int, frac) = split(scaled, places);
            join(group_thousands(&int.to_string()), &pad_fraction(frac, places as usize))
        }
        // Padding past 256 bits: append the zeros textually
        None => {
            let (int, frac) = split(raw, decimals);
            let mut frac = pad_fraction(frac, decimals as usize);
            frac.extend(std::iter::repeat('0').take((places - decimals) as usize));
            join(group_thousands(&int.to_string()), &frac)
        }
    }
}

/// `"$1,234.56 USDC"`
pub fn format_usdc_with_symbol(amount: Amount) -> String {
    format!("${} USDC", format_fixed(amount, USDC_DECIMALS, 2))
}

/// Parse user input like `"1000.5"` into smallest units.
///
/// Rejects empty input, signs, grouping separators, more than one decimal
/// point, and more fractional digits than the token has.
pub fn parse_units(input: &str, decimals: u8) -> Result<Amount> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    if s.starts_with('-') {
        return Err(AmountError::Negative);
    }

    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(AmountError::MultipleDecimalPoints);
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::Empty);
    }
    if let Some(c) = int_part.chars().chain(frac_part.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(AmountError::InvalidDigit(c));
    }
    if frac_part.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals { decimals });
    }

    let int = if int_part.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(int_part).map_err(|_| AmountError::Overflow)?
    };
    let frac = if frac_part.is_empty() {
        U256::zero()
    } else {
        let padded = format!("{:0<width$}", frac_part, width = decimals as usize);
        U256::from_dec_str(&padded).map_err(|_| AmountError::Overflow)?
    };

    // A zero integer part needs no scale, so tiny values parse at any decimals
    let whole = if int.is_zero() {
        U256::zero()
    } else {
        int.checked_mul(pow10(decimals)?).ok_or(AmountError::Overflow)?
    };
    whole.checked_add(frac).map(Amount::from_u256).ok_or(AmountError::Overflow)
}

/// Display strings for a [`FeeQuote`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedQuote {
    pub gross: String,
    pub fee: String,
    pub net: String,
    pub fee_percentage: String,
}

impl FeeQuote {
    /// Render each amount with a caller-supplied formatter
    pub fn formatted_with(&self, fmt: impl Fn(Amount) -> String) -> FormattedQuote {
        FormattedQuote {
            gross: fmt(self.gross),
            fee: fmt(self.fee),
            net: fmt(self.net),
            fee_percentage: format!("{}%", FEE_PERCENTAGE),
        }
    }

    pub fn formatted(&self, decimals: u8) -> FormattedQuote {
        self.formatted_with(|a| format_amount(a, decimals))
    }
}
