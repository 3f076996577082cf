//! Boundary errors for token amounts

use thiserror::Error;

/// Reasons an amount is rejected before it reaches the accounting core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must not be negative")]
    Negative,

    #[error("amount contains a non-digit character: {0:?}")]
    InvalidDigit(char),

    #[error("amount has more than one decimal point")]
    MultipleDecimalPoints,

    #[error("amount has more than {decimals} fractional digits")]
    TooManyDecimals { decimals: u8 },

    #[error("amount exceeds the 256-bit token range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, AmountError>;
