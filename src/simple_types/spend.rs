//! Spend amount type

use std::fmt;

use rust_decimal::Decimal;

use super::constrained_type;
use super::error::ValidationError;

/// Amount a customer spends before any discount.
///
/// A non-negative [`Decimal`]. Currency math stays in `Decimal` so that
/// `100 * 0.9` is exactly `90`.
///
/// # Examples
///
/// ```
/// use customer_discount::simple_types::Spend;
/// use rust_decimal_macros::dec;
///
/// let spend = Spend::create(dec!(99.99)).unwrap();
/// assert_eq!(spend.value(), dec!(99.99));
///
/// assert!(Spend::create(dec!(-1)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Decimal", into = "Decimal")
)]
pub struct Spend(Decimal);

impl Spend {
    /// Field name reported in validation errors
    const FIELD_NAME: &'static str = "Spend";

    /// Creates a `Spend` from a decimal amount
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the amount is negative.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal_at_least(Self::FIELD_NAME, Spend, Decimal::ZERO, value)
    }

    /// Creates a `Spend` without reporting validation failure
    ///
    /// Only for amounts known to be valid, such as literals in sample data.
    ///
    /// # Panics
    ///
    /// Panics if the amount is negative.
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value)
            .unwrap_or_else(|error| panic!("Not expecting Spend to be negative: {error}"))
    }

    /// Returns the amount
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Spend {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl TryFrom<Decimal> for Spend {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl From<Spend> for Decimal {
    fn from(spend: Spend) -> Self {
        spend.0
    }
}
