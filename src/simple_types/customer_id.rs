//! Customer identifier type

use std::fmt;

use super::constrained_type;
use super::error::ValidationError;

/// Maximum character count for `CustomerId`
const CUSTOMER_ID_MAX_LENGTH: usize = 50;

/// Identifies a customer, registered or not.
///
/// A non-empty string of at most 50 characters. The only way to obtain one
/// is [`CustomerId::create`].
///
/// # Examples
///
/// ```
/// use customer_discount::simple_types::CustomerId;
///
/// let id = CustomerId::create("CustomerId", "John").unwrap();
/// assert_eq!(id.value(), "John");
///
/// assert!(CustomerId::create("CustomerId", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct CustomerId(String);

impl CustomerId {
    /// Field name used when the caller has no better one
    pub const FIELD_NAME: &'static str = "CustomerId";

    /// Creates a `CustomerId` from a string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or exceeds 50 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, CustomerId, CUSTOMER_ID_MAX_LENGTH, value)
    }

    /// Returns the identifier text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl TryFrom<String> for CustomerId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(Self::FIELD_NAME, &value)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}
