//! Discount calculation over [`Customer`]
//!
//! Eligible customers get 10% off a spend of 100 or more. Every other case
//! pays the full spend. All functions are pure and dispatch on the customer
//! case with an exhaustive `match`.
//!
//! ```
//! use customer_discount::customer::Customer;
//! use customer_discount::discount::{calculate_total, calculate_with_bonus};
//! use customer_discount::simple_types::Spend;
//! use rust_decimal_macros::dec;
//!
//! let john = Customer::eligible("John").unwrap();
//! let spend = Spend::create(dec!(100)).unwrap();
//!
//! assert_eq!(calculate_total(&john, spend), dec!(90));
//! assert_eq!(calculate_with_bonus(&john, spend), dec!(85.5));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::customer::Customer;
use crate::simple_types::Spend;

/// Spend at or above which an eligible customer gets the discount
pub const DISCOUNT_THRESHOLD: Decimal = dec!(100);

/// Fraction taken off the spend once the threshold is met
pub const DISCOUNT_RATE: Decimal = dec!(0.10);

/// Extra fraction taken off an eligible customer's total by [`calculate_with_bonus`]
pub const BONUS_RATE: Decimal = dec!(0.05);

/// Returns the amount knocked off `spend` for this customer.
///
/// Zero unless the customer is [`Customer::Eligible`] and the spend reaches
/// [`DISCOUNT_THRESHOLD`].
#[must_use]
pub fn discount_amount(customer: &Customer, spend: Spend) -> Decimal {
    let amount = spend.value();
    match customer {
        Customer::Eligible(_) if amount >= DISCOUNT_THRESHOLD => amount * DISCOUNT_RATE,
        Customer::Eligible(_) | Customer::Registered(_) | Customer::Guest(_) => Decimal::ZERO,
    }
}

/// Returns the total the customer pays for `spend`.
///
/// # Examples
///
/// ```
/// use customer_discount::customer::Customer;
/// use customer_discount::discount::calculate_total;
/// use customer_discount::simple_types::Spend;
/// use rust_decimal_macros::dec;
///
/// let mary = Customer::eligible("Mary").unwrap();
/// let sarah = Customer::guest("Sarah").unwrap();
///
/// assert_eq!(calculate_total(&mary, Spend::create(dec!(99)).unwrap()), dec!(99));
/// assert_eq!(calculate_total(&sarah, Spend::create(dec!(100)).unwrap()), dec!(100));
/// ```
#[must_use]
pub fn calculate_total(customer: &Customer, spend: Spend) -> Decimal {
    spend.value() - discount_amount(customer, spend)
}

/// Returns the total with a further 5% off for eligible customers.
///
/// The bonus applies to the already discounted total and does not depend on
/// the threshold.
#[must_use]
pub fn calculate_with_bonus(customer: &Customer, spend: Spend) -> Decimal {
    let base_total = calculate_total(customer, spend);
    match customer {
        Customer::Eligible(_) => base_total * (Decimal::ONE - BONUS_RATE),
        Customer::Registered(_) | Customer::Guest(_) => base_total,
    }
}

/// Returns a human-readable label for the customer.
///
/// - `Eligible` → `"VIP Customer: {id}"`
/// - `Registered` → `"Regular Customer: {id}"`
/// - `Guest` → `"Guest: {id}"`
#[must_use]
pub fn describe_customer(customer: &Customer) -> String {
    customer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn spend(amount: Decimal) -> Spend {
        Spend::create(amount).unwrap()
    }

    #[rstest]
    #[case(dec!(100), dec!(10.00))]
    #[case(dec!(250), dec!(25.00))]
    #[case(dec!(99.99), Decimal::ZERO)]
    fn test_discount_amount_for_eligible(#[case] amount: Decimal, #[case] expected: Decimal) {
        let john = Customer::eligible("John").unwrap();

        assert_eq!(discount_amount(&john, spend(amount)), expected);
    }

    #[rstest]
    fn test_discount_amount_is_zero_for_others() {
        let richard = Customer::registered("Richard").unwrap();
        let sarah = Customer::guest("Sarah").unwrap();

        assert_eq!(discount_amount(&richard, spend(dec!(1000))), Decimal::ZERO);
        assert_eq!(discount_amount(&sarah, spend(dec!(1000))), Decimal::ZERO);
    }

    #[rstest]
    fn test_threshold_is_inclusive() {
        let john = Customer::eligible("John").unwrap();

        assert_eq!(calculate_total(&john, spend(DISCOUNT_THRESHOLD)), dec!(90));
    }

    #[rstest]
    fn test_zero_spend() {
        let john = Customer::eligible("John").unwrap();

        assert_eq!(calculate_total(&john, spend(Decimal::ZERO)), Decimal::ZERO);
        assert_eq!(calculate_with_bonus(&john, spend(Decimal::ZERO)), Decimal::ZERO);
    }

    #[rstest]
    fn test_bonus_below_threshold_still_applies_to_eligible() {
        let mary = Customer::eligible("Mary").unwrap();

        assert_eq!(calculate_with_bonus(&mary, spend(dec!(50))), dec!(47.5));
    }

    #[rstest]
    fn test_bonus_skips_non_eligible() {
        let richard = Customer::registered("Richard").unwrap();

        assert_eq!(calculate_with_bonus(&richard, spend(dec!(100))), dec!(100));
    }

    #[rstest]
    fn test_describe_customer_matches_display() {
        let richard = Customer::registered("Richard").unwrap();

        assert_eq!(describe_customer(&richard), "Regular Customer: Richard");
    }
}
