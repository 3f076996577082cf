//! End-to-end deposit scenarios over 6-decimal USDC amounts

use ethernity_fees::balance::DEFAULT_ESTIMATED_GAS;
use ethernity_fees::format::{format_amount, format_usdc_with_symbol, USDC_DECIMALS};
use ethernity_fees::validation::{validate_deposit, validate_plan_deposit, DepositIssue};
use ethernity_fees::{
    deposit_breakdown, fee_of, gross_from_net, net_of, quote, required_balances,
    should_have_principal, validate_balance, Amount, DepositPolicy, RequiredBalances,
};
use ethernity_integration_tests::{init_logging, usdc, usdc_str};

fn amt(v: u64) -> Amount {
    Amount::from(v)
}

#[test]
fn test_fee_on_one_thousand_usdc() {
    init_logging();
    assert_eq!(fee_of(amt(1_000_000_000)), amt(30_000_000));
    assert_eq!(net_of(amt(1_000_000_000)), amt(970_000_000));
}

#[test]
fn test_initial_plus_monthly_breakdown() {
    init_logging();
    let b = deposit_breakdown(amt(10_000_000_000), amt(500_000_000)).unwrap();

    assert_eq!(b.total_gross, amt(10_500_000_000));
    assert_eq!(b.initial_fee, amt(300_000_000));
    assert_eq!(b.monthly_fee, amt(15_000_000));
    assert_eq!(b.total_fees, amt(315_000_000));
    assert_eq!(b.total_net, amt(10_185_000_000));

    log::info!(
        "deposit {} -> fees {}, lands {}",
        format_usdc_with_symbol(b.total_gross),
        format_usdc_with_symbol(b.total_fees),
        format_usdc_with_symbol(b.total_net)
    );
}

#[test]
fn test_gross_from_net_exact_inverse() {
    init_logging();
    let gross = gross_from_net(amt(970_000_000)).unwrap();
    assert_eq!(gross, amt(1_000_000_000));
    assert_eq!(net_of(gross), amt(970_000_000));
}

#[test]
fn test_short_on_usdc_enough_gas() {
    init_logging();
    let required = RequiredBalances {
        breakdown: deposit_breakdown(amt(10_000_000_000), amt(500_000_000)).unwrap(),
        usdc_required: amt(10_500_000_000),
        gas_required: amt(5_000_000),
    };
    let v = validate_balance(amt(9_000_000_000), amt(10_000_000), &required);

    assert!(!v.has_enough_usdc);
    assert_eq!(v.usdc_shortfall, amt(1_500_000_000));
    assert!(v.has_enough_gas);
    assert_eq!(v.gas_shortfall, Amount::ZERO);
    assert!(!v.is_valid);
}

#[test]
fn test_zero_amounts() {
    init_logging();
    assert_eq!(fee_of(Amount::ZERO), Amount::ZERO);
    assert_eq!(net_of(Amount::ZERO), Amount::ZERO);

    let b = deposit_breakdown(Amount::ZERO, Amount::ZERO).unwrap();
    for field in [
        b.initial_gross, b.initial_fee, b.initial_net,
        b.monthly_gross, b.monthly_fee, b.monthly_net,
        b.total_gross, b.total_fees, b.total_net,
    ] {
        assert_eq!(field, Amount::ZERO);
    }
}

#[test]
fn test_preflight_from_user_input() {
    init_logging();
    let policy = DepositPolicy::default();

    // Saver aged 45 must fund a principal; typed as text in the plan form
    assert!(should_have_principal(45, 65));
    let initial = usdc_str("1500.25");
    let monthly = usdc_str("200");
    assert!(initial >= policy.min_principal);
    let plan = validate_plan_deposit(initial, monthly, 45, 65, usdc(2_000), &policy).unwrap();
    assert!(plan.is_valid());

    let required = required_balances(initial, monthly, policy.default_estimated_gas).unwrap();
    assert_eq!(required.usdc_required, usdc_str("1700.25"));
    assert_eq!(required.gas_required, amt(DEFAULT_ESTIMATED_GAS));

    // Wallet holds exactly the gross and twice the gas reserve
    let v = validate_balance(required.usdc_required, amt(2 * DEFAULT_ESTIMATED_GAS), &required);
    assert!(v.is_valid);

    // Fees are per leg: 3% of 1500.25 is 45.0075, 3% of 200 is 6
    assert_eq!(required.breakdown.initial_fee, amt(45_007_500));
    assert_eq!(required.breakdown.monthly_fee, usdc(6));
    assert_eq!(format_amount(required.breakdown.total_net, USDC_DECIMALS), "1,649.2425");
}

#[test]
fn test_sizing_deposit_for_target_net() {
    init_logging();
    // Saver wants 500 USDC to land in the fund
    let target = usdc(500);
    let gross = gross_from_net(target).unwrap();
    assert_eq!(gross, amt(515_463_917));
    assert!(net_of(gross) >= target);

    let v = validate_deposit(gross, usdc(600), &DepositPolicy::default(), true);
    assert!(v.is_valid());
    assert_eq!(v.quote, quote(gross));
}

#[test]
fn test_deposit_below_minimum_and_unfunded() {
    init_logging();
    let v = validate_deposit(usdc(50), usdc(10), &DepositPolicy::default(), true);
    assert!(!v.is_valid());
    assert_eq!(
        v.errors,
        vec![
            DepositIssue::BelowMinimum { minimum: usdc(100) },
            DepositIssue::InsufficientBalance { required: usdc(50), shortfall: usdc(40) },
        ]
    );
    assert_eq!(v.errors[0].to_string(), "minimum amount is 100000000 units");
}

#[test]
fn test_breakdown_serializes_for_ui() {
    init_logging();
    let b = deposit_breakdown(usdc(1000), usdc(100)).unwrap();
    let json = serde_json::to_value(&b).unwrap();
    assert_eq!(json["total_gross"], "1100000000");
    assert_eq!(json["total_fees"], "33000000");
}

#[test]
fn test_plan_principal_below_policy_minimum() {
    init_logging();
    let policy = DepositPolicy {
        min_principal: usdc(5_000),
        ..DepositPolicy::default()
    };

    // Saver aged 50 must fund a principal of at least 5000 USDC
    let v = validate_plan_deposit(usdc(1_000), usdc(100), 50, 65, usdc(2_000), &policy).unwrap();
    assert_eq!(v.errors, vec![DepositIssue::PrincipalBelowMinimum { minimum: usdc(5_000) }]);
    assert_eq!(policy.format_quote(&v.quote).gross, "1,100");
    assert_eq!(policy.format_token(v.quote.fee), "33");
}
