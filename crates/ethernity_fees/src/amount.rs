//! Token amount in smallest units

use crate::error::{AmountError, Result};
use primitive_types::U256;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Non-negative integer amount of a token, denominated in its smallest unit.
///
/// Backed by `U256` so any ERC-20 balance fits. Decimals are not part of the
/// value; they only matter when formatting for display (see [`crate::format`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(U256);

impl Amount {
    pub const ZERO: Self = Self(U256([0; 4]));
    pub const MAX: Self = Self(U256([u64::MAX; 4]));

    pub const fn from_u256(raw: U256) -> Self {
        Self(raw)
    }

    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `units * 10^decimals`, e.g. `Amount::from_units(100, 6)` is 100 USDC
    pub fn from_units(units: u64, decimals: u8) -> Result<Self> {
        let scale = pow10(decimals)?;
        U256::from(units)
            .checked_mul(scale)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or(AmountError::Overflow)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Subtract with saturation at 0
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

/// `10^decimals` as U256; 10^77 is the largest power that fits
pub(crate) fn pow10(decimals: u8) -> Result<U256> {
    if decimals > 77 {
        return Err(AmountError::Overflow);
    }
    Ok(U256::exp10(decimals as usize))
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Amount> for U256 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses a plain decimal integer of smallest units (`"1000000"`).
/// Use [`crate::format::parse_units`] for human input like `"1.5"`.
impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        if s.starts_with('-') {
            return Err(AmountError::Negative);
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(AmountError::InvalidDigit(c));
        }
        U256::from_dec_str(s)
            .map(Self)
            .map_err(|_| AmountError::Overflow)
    }
}

// Serialized as a decimal string so values above 2^53 survive JSON consumers.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal integer string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Amount, E> {
        Ok(Amount::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Amount, E> {
        Ok(Amount::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Amount, E> {
        u64::try_from(v)
            .map(Amount::from)
            .map_err(|_| E::custom(AmountError::Negative))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Amount, E> {
        v.parse().map_err(E::custom)
    }
}
