//! Iteration 1: a union with an eligibility flag on the registered case
//!
//! A guest can no longer be eligible because [`UnregisteredCustomer`] has no
//! flag. Eligibility is still a boolean that every rule has to remember to
//! read, which [`Customer::into_explicit`] removes by moving it into the case.

use rust_decimal::Decimal;

use crate::customer;
use crate::discount::{DISCOUNT_RATE, DISCOUNT_THRESHOLD};
use crate::simple_types::{CustomerId, Spend};

/// A registered customer with an eligibility flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegisteredCustomer {
    id: CustomerId,
    is_eligible: bool,
}

impl RegisteredCustomer {
    /// Creates a registered customer
    #[must_use]
    pub const fn new(id: CustomerId, is_eligible: bool) -> Self {
        Self { id, is_eligible }
    }

    /// Returns the customer id
    #[must_use]
    pub const fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Returns the eligibility flag
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.is_eligible
    }
}

/// A customer who has not registered. Carries no eligibility flag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnregisteredCustomer {
    id: CustomerId,
}

impl UnregisteredCustomer {
    /// Creates a guest payload
    #[must_use]
    pub const fn new(id: CustomerId) -> Self {
        Self { id }
    }

    /// Returns the customer id
    #[must_use]
    pub const fn id(&self) -> &CustomerId {
        &self.id
    }
}

/// Registered (with a flag) or guest.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Customer {
    /// Registered customer, eligible or not
    Registered(RegisteredCustomer),
    /// Unregistered customer
    Guest(UnregisteredCustomer),
}

impl Customer {
    /// Converts to the final model, turning the flag into a case
    ///
    /// # Examples
    ///
    /// ```
    /// use customer_discount::customer::CustomerKind;
    /// use customer_discount::iterations::flagged::{Customer, RegisteredCustomer};
    /// use customer_discount::simple_types::CustomerId;
    ///
    /// let id = CustomerId::create("CustomerId", "John").unwrap();
    /// let john = Customer::Registered(RegisteredCustomer::new(id, true));
    ///
    /// assert_eq!(john.into_explicit().kind(), CustomerKind::Eligible);
    /// ```
    #[must_use]
    pub fn into_explicit(self) -> customer::Customer {
        match self {
            Self::Registered(registered) if registered.is_eligible => {
                customer::Customer::Eligible(customer::RegisteredCustomer::new(registered.id))
            }
            Self::Registered(registered) => {
                customer::Customer::Registered(customer::RegisteredCustomer::new(registered.id))
            }
            Self::Guest(guest) => {
                customer::Customer::Guest(customer::UnregisteredCustomer::new(guest.id))
            }
        }
    }
}

impl From<Customer> for customer::Customer {
    fn from(flagged: Customer) -> Self {
        flagged.into_explicit()
    }
}

/// Total under the flagged model.
#[must_use]
pub fn calculate_total(customer: &Customer, spend: Spend) -> Decimal {
    let amount = spend.value();
    match customer {
        Customer::Registered(registered)
            if registered.is_eligible() && amount >= DISCOUNT_THRESHOLD =>
        {
            amount - amount * DISCOUNT_RATE
        }
        Customer::Registered(_) | Customer::Guest(_) => amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CustomerKind;
    use crate::discount;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn registered(id: &str, is_eligible: bool) -> Customer {
        Customer::Registered(RegisteredCustomer::new(
            CustomerId::create("CustomerId", id).unwrap(),
            is_eligible,
        ))
    }

    fn guest(id: &str) -> Customer {
        Customer::Guest(UnregisteredCustomer::new(
            CustomerId::create("CustomerId", id).unwrap(),
        ))
    }

    #[rstest]
    #[case(registered("John", true), dec!(100), dec!(90))]
    #[case(registered("Mary", true), dec!(99), dec!(99))]
    #[case(registered("Richard", false), dec!(100), dec!(100))]
    #[case(guest("Sarah"), dec!(100), dec!(100))]
    fn test_calculate_total(
        #[case] customer: Customer,
        #[case] amount: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(
            calculate_total(&customer, Spend::create(amount).unwrap()),
            expected
        );
    }

    #[rstest]
    #[case(registered("John", true), CustomerKind::Eligible)]
    #[case(registered("Richard", false), CustomerKind::Registered)]
    #[case(guest("Sarah"), CustomerKind::Guest)]
    fn test_into_explicit(#[case] flagged: Customer, #[case] expected: CustomerKind) {
        let explicit: customer::Customer = flagged.into();

        assert_eq!(explicit.kind(), expected);
    }

    #[rstest]
    #[case(registered("John", true))]
    #[case(registered("Richard", false))]
    #[case(guest("Sarah"))]
    fn test_conversion_preserves_totals(#[case] flagged: Customer) {
        let spend = Spend::create(dec!(150)).unwrap();
        let flagged_total = calculate_total(&flagged, spend);

        assert_eq!(
            discount::calculate_total(&flagged.into_explicit(), spend),
            flagged_total
        );
    }
}
