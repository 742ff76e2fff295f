//! Iteration 0: two independent booleans
//!
//! Deliberately weak. Nothing stops a caller from building a customer who is
//! eligible but not registered, and [`calculate_total_defective`] hands that
//! customer a discount. Kept as a negative example; do not use it for real
//! totals.
//!
//! ```
//! use customer_discount::iterations::naive::{
//!     NaiveCustomer, calculate_total, calculate_total_defective,
//! };
//! use customer_discount::simple_types::{CustomerId, Spend};
//! use rust_decimal_macros::dec;
//!
//! let id = CustomerId::create("CustomerId", "Grinch").unwrap();
//! let grinch = NaiveCustomer::new(id, true, false);
//! let spend = Spend::create(dec!(100)).unwrap();
//!
//! assert!(!grinch.is_legal());
//! assert_eq!(calculate_total_defective(&grinch, spend), dec!(90));
//! assert_eq!(calculate_total(&grinch, spend), dec!(100));
//! ```

use rust_decimal::Decimal;

use crate::discount::{DISCOUNT_RATE, DISCOUNT_THRESHOLD};
use crate::simple_types::{CustomerId, Spend};

/// A customer described by two flags that are not tied together.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NaiveCustomer {
    /// Customer id
    pub id: CustomerId,
    /// Qualifies for the loyalty discount
    pub is_eligible: bool,
    /// Has registered with the shop
    pub is_registered: bool,
}

impl NaiveCustomer {
    /// Builds a customer from any combination of flags, legal or not
    #[must_use]
    pub const fn new(id: CustomerId, is_eligible: bool, is_registered: bool) -> Self {
        Self {
            id,
            is_eligible,
            is_registered,
        }
    }

    /// Returns `false` for the combination the business forbids: eligible
    /// without being registered
    #[must_use]
    pub const fn is_legal(&self) -> bool {
        self.is_registered || !self.is_eligible
    }
}

/// Total with both flags checked.
///
/// Correct only as long as every caller remembers the registration check.
#[must_use]
pub fn calculate_total(customer: &NaiveCustomer, spend: Spend) -> Decimal {
    let amount = spend.value();
    if customer.is_eligible && customer.is_registered && amount >= DISCOUNT_THRESHOLD {
        amount - amount * DISCOUNT_RATE
    } else {
        amount
    }
}

/// Total that forgets the registration check.
///
/// Defective on purpose: an eligible but unregistered customer is
/// discounted.
#[must_use]
pub fn calculate_total_defective(customer: &NaiveCustomer, spend: Spend) -> Decimal {
    let amount = spend.value();
    if customer.is_eligible && amount >= DISCOUNT_THRESHOLD {
        amount - amount * DISCOUNT_RATE
    } else {
        amount
    }
}
