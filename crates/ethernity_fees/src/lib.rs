//! Fee accounting for Ethernity retirement deposits
//! Pure integer math over token smallest units, no I/O in the core, all functions total

pub mod error;
pub mod amount;
pub mod math;
pub mod fees;
pub mod deposit;
pub mod balance;
pub mod validation;
pub mod format;
pub mod config;

// Re-export commonly used types
pub use amount::Amount;
pub use balance::*;
pub use config::DepositPolicy;
pub use deposit::*;
pub use error::{AmountError, Result};
pub use fees::*;
