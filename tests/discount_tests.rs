//! Scenario tests for the discount rules across all three customer models.

use customer_discount::iterations::{flagged, naive};
use customer_discount::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn spend(amount: Decimal) -> Spend {
    Spend::create(amount).unwrap()
}

fn id(value: &str) -> CustomerId {
    CustomerId::create("CustomerId", value).unwrap()
}

// =============================================================================
// Final model
// =============================================================================

#[rstest]
#[case::john_eligible_at_threshold(Customer::eligible("John").unwrap(), dec!(100), dec!(90))]
#[case::mary_eligible_below_threshold(Customer::eligible("Mary").unwrap(), dec!(99), dec!(99))]
#[case::richard_registered(Customer::registered("Richard").unwrap(), dec!(100), dec!(100))]
#[case::sarah_guest(Customer::guest("Sarah").unwrap(), dec!(100), dec!(100))]
fn calculate_total_scenarios(
    #[case] customer: Customer,
    #[case] amount: Decimal,
    #[case] expected: Decimal,
) {
    assert_eq!(calculate_total(&customer, spend(amount)), expected);
}

#[rstest]
fn calculate_with_bonus_for_john() {
    let john = Customer::eligible("John").unwrap();

    assert_eq!(calculate_with_bonus(&john, spend(dec!(100))), dec!(85.5));
}

#[rstest]
fn totals_keep_exact_decimal_precision() {
    let john = Customer::eligible("John").unwrap();

    assert_eq!(calculate_total(&john, spend(dec!(100.10))), dec!(90.09));
}

#[rstest]
#[case(Customer::eligible("John").unwrap(), "VIP Customer: John")]
#[case(Customer::registered("Richard").unwrap(), "Regular Customer: Richard")]
#[case(Customer::guest("Sarah").unwrap(), "Guest: Sarah")]
fn describe_customer_labels(#[case] customer: Customer, #[case] expected: &str) {
    assert_eq!(describe_customer(&customer), expected);
}

#[rstest]
fn every_kind_is_handled() {
    for kind in CustomerKind::ALL {
        let customer = Customer::create(kind, "Someone").unwrap();
        let label = describe_customer(&customer);

        assert!(label.ends_with("Someone"));
        assert!(calculate_total(&customer, spend(dec!(100))) <= dec!(100));
    }
}

#[rstest]
fn guest_payload_has_only_an_id() {
    let guest = UnregisteredCustomer::new(id("Sarah"));
    let customer = Customer::Guest(guest);

    assert!(!customer.is_eligible());
    assert!(!customer.is_registered());
}

// =============================================================================
// Iteration 0: naive booleans (defective on purpose)
// =============================================================================

#[rstest]
fn naive_defective_rule_discounts_grinch() {
    let grinch = naive::NaiveCustomer::new(id("Grinch"), true, false);

    assert!(!grinch.is_legal());
    assert_eq!(
        naive::calculate_total_defective(&grinch, spend(dec!(100))),
        dec!(90)
    );
}

#[rstest]
fn naive_guarded_rule_refuses_grinch() {
    let grinch = naive::NaiveCustomer::new(id("Grinch"), true, false);

    assert_eq!(naive::calculate_total(&grinch, spend(dec!(100))), dec!(100));
}

// =============================================================================
// Iteration 1: union with an eligibility flag
// =============================================================================

#[rstest]
#[case(true, dec!(90))]
#[case(false, dec!(100))]
fn flagged_registered_totals(#[case] is_eligible: bool, #[case] expected: Decimal) {
    let customer =
        flagged::Customer::Registered(flagged::RegisteredCustomer::new(id("John"), is_eligible));

    assert_eq!(
        flagged::calculate_total(&customer, spend(dec!(100))),
        expected
    );
}

#[rstest]
fn flagged_guest_pays_full() {
    let sarah = flagged::Customer::Guest(flagged::UnregisteredCustomer::new(id("Sarah")));

    assert_eq!(flagged::calculate_total(&sarah, spend(dec!(100))), dec!(100));
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
#[case::empty_id(Customer::guest("").map(|_| ()), "CustomerId")]
#[case::long_id(Customer::eligible(&"x".repeat(51)).map(|_| ()), "CustomerId")]
#[case::negative_spend(Spend::create(dec!(-1)).map(|_| ()), "Spend")]
#[case::unknown_kind(Customer::parse("VIP", "John").map(|_| ()), "CustomerKind")]
fn validation_errors_name_the_offending_field(
    #[case] result: Result<(), ValidationError>,
    #[case] field_name: &str,
) {
    assert_eq!(result.unwrap_err().field_name, field_name);
}
