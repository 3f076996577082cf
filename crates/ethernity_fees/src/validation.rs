//! Single-deposit validation against a [`DepositPolicy`]

use crate::amount::Amount;
use crate::balance::shortfall;
use crate::config::DepositPolicy;
use crate::deposit::should_have_principal;
use crate::error::Result;
use crate::fees::{quote, FeeQuote, FEE_PERCENTAGE};
use std::fmt;

/// Blocking problem with a deposit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositIssue {
    ZeroAmount,
    BelowMinimum { minimum: Amount },
    AboveMaximum { maximum: Amount },
    InsufficientBalance { required: Amount, shortfall: Amount },
    PrincipalBelowMinimum { minimum: Amount },
}

/// Non-blocking notice shown alongside a valid deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositWarning {
    HighFee { fee: Amount },
}

impl fmt::Display for DepositIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAmount => write!(f, "amount must be greater than 0"),
            Self::BelowMinimum { minimum } => write!(f, "minimum amount is {} units", minimum),
            Self::AboveMaximum { maximum } => write!(f, "maximum amount is {} units", maximum),
            Self::InsufficientBalance { required, shortfall } => write!(
                f,
                "insufficient balance: {} units required, {} units short",
                required, shortfall
            ),
            Self::PrincipalBelowMinimum { minimum } => {
                write!(f, "principal is below the minimum of {} units", minimum)
            }
        }
    }
}

impl fmt::Display for DepositWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighFee { fee } => write!(f, "fee will be {} units ({}%)", fee, FEE_PERCENTAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositValidation {
    pub errors: Vec<DepositIssue>,
    pub warnings: Vec<DepositWarning>,
    pub quote: FeeQuote,
}

impl DepositValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Nonzero and within the optional bounds
pub fn is_valid_deposit_amount(amount: Amount, min: Option<Amount>, max: Option<Amount>) -> bool {
    if amount.is_zero() {
        return false;
    }
    if min.is_some_and(|min| amount < min) {
        return false;
    }
    if max.is_some_and(|max| amount > max) {
        return false;
    }
    true
}

/// Validate one gross deposit against the policy and, optionally, the
/// user's stablecoin balance. The gross is the full amount required;
/// the fee comes out of it.
pub fn validate_deposit(
    amount: Amount,
    user_balance: Amount,
    policy: &DepositPolicy,
    check_balance: bool,
) -> DepositValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if amount.is_zero() {
        errors.push(DepositIssue::ZeroAmount);
    }
    if amount < policy.min_deposit {
        errors.push(DepositIssue::BelowMinimum { minimum: policy.min_deposit });
    }
    if let Some(maximum) = policy.max_deposit {
        if amount > maximum {
            errors.push(DepositIssue::AboveMaximum { maximum });
        }
    }
    if check_balance && user_balance < amount {
        errors.push(DepositIssue::InsufficientBalance {
            required: amount,
            shortfall: shortfall(user_balance, amount),
        });
    }

    let quote = quote(amount);
    if quote.fee > policy.fee_warning_threshold {
        warnings.push(DepositWarning::HighFee { fee: quote.fee });
    }

    log::debug!(
        "deposit {} validated: {} errors, {} warnings",
        amount,
        errors.len(),
        warnings.len()
    );

    DepositValidation { errors, warnings, quote }
}

/// Principal rule for a retirement plan.
///
/// Plans that must carry a principal (see [`should_have_principal`]) need at
/// least `policy.min_principal`; an optional principal, once given, must meet
/// the same floor. Zero is fine when none is required.
pub fn check_principal(
    principal: Amount,
    current_age: u32,
    retirement_age: u32,
    policy: &DepositPolicy,
) -> Option<DepositIssue> {
    let required = should_have_principal(current_age, retirement_age);
    if principal < policy.min_principal && (required || !principal.is_zero()) {
        return Some(DepositIssue::PrincipalBelowMinimum { minimum: policy.min_principal });
    }
    None
}

/// Validate the opening deposit of a plan: principal plus the first monthly
/// deposit, sent as one gross amount.
///
/// Fails only if the two amounts sum past 256 bits.
pub fn validate_plan_deposit(
    principal: Amount,
    monthly_deposit: Amount,
    current_age: u32,
    retirement_age: u32,
    user_balance: Amount,
    policy: &DepositPolicy,
) -> Result<DepositValidation> {
    let initial_deposit = principal.checked_add(monthly_deposit)?;
    let mut validation = validate_deposit(initial_deposit, user_balance, policy, true);

    if let Some(issue) = check_principal(principal, current_age, retirement_age, policy) {
        log::debug!("plan principal {} rejected: {}", principal, issue);
        validation.errors.push(issue);
    }
    Ok(validation)
}
