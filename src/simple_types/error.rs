//! Validation error type definition

use thiserror::Error;

/// Raised when raw input cannot become a customer or a spend.
///
/// `field_name` says which constructor refused the value:
///
/// - `CustomerId` (or the name passed to [`CustomerId::create`]): empty, or
///   longer than 50 characters
/// - `Spend`: a negative amount
/// - `CustomerKind`: a label other than `Eligible`, `Registered`, `Guest`
///
/// [`CustomerId::create`]: super::CustomerId::create
///
/// # Examples
///
/// ```
/// use customer_discount::customer::Customer;
///
/// let error = Customer::parse("EligibleGuest", "Grinch").unwrap_err();
/// assert_eq!(error.field_name, "CustomerKind");
///
/// let error = Customer::guest("").unwrap_err();
/// assert_eq!(error.to_string(), "CustomerId: Must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// `CustomerId`, `Spend` or `CustomerKind`
    pub field_name: String,
    /// Which constraint the value broke
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
