//! Customer classification
//!
//! A customer is exactly one of three cases. Eligibility for the loyalty
//! discount is carried by the case itself instead of a boolean, and only the
//! registered payload can appear under [`Customer::Eligible`]. An eligible
//! guest therefore has no representation.
//!
//! ```
//! use customer_discount::customer::{Customer, CustomerKind};
//!
//! let john = Customer::eligible("John").unwrap();
//! let sarah = Customer::guest("Sarah").unwrap();
//!
//! assert_eq!(john.kind(), CustomerKind::Eligible);
//! assert!(john.is_eligible());
//! assert!(!sarah.is_eligible());
//! assert_eq!(sarah.to_string(), "Guest: Sarah");
//! ```
//!
//! The payloads take nothing but an id, so there is no way to hand a guest
//! or a registered customer an eligibility flag:
//!
//! ```compile_fail,E0061
//! use customer_discount::customer::{Customer, UnregisteredCustomer};
//! use customer_discount::simple_types::CustomerId;
//!
//! let id = CustomerId::create("CustomerId", "Grinch").unwrap();
//! let grinch = Customer::Guest(UnregisteredCustomer::new(id, true));
//! ```
//!
//! ```compile_fail,E0061
//! use customer_discount::customer::{Customer, RegisteredCustomer};
//! use customer_discount::simple_types::CustomerId;
//!
//! let id = CustomerId::create("CustomerId", "Richard").unwrap();
//! let richard = Customer::Registered(RegisteredCustomer::new(id, false));
//! ```
//!
//! And every dispatch must cover all three cases:
//!
//! ```compile_fail,E0004
//! use customer_discount::customer::Customer;
//!
//! fn label(customer: &Customer) -> &'static str {
//!     match customer {
//!         Customer::Eligible(_) => "VIP",
//!         Customer::Registered(_) => "Regular",
//!     }
//! }
//! ```

mod kind;

use std::fmt;

use static_assertions::assert_impl_all;

use crate::simple_types::{CustomerId, ValidationError};

pub use kind::CustomerKind;

/// A customer who has registered with the shop.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisteredCustomer {
    id: CustomerId,
}

impl RegisteredCustomer {
    /// Wraps an already validated id
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

/// A customer who has not registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnregisteredCustomer {
    id: CustomerId,
}

impl UnregisteredCustomer {
    /// Wraps an already validated id
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

/// A customer's relationship to the discount program.
///
/// With the `serde` feature the case is written to an internal `kind` tag:
/// `{"kind":"Eligible","id":"John"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind")
)]
pub enum Customer {
    /// Registered and qualifies for the loyalty discount
    Eligible(RegisteredCustomer),
    /// Registered but does not qualify
    Registered(RegisteredCustomer),
    /// Not registered; can never qualify
    Guest(UnregisteredCustomer),
}

assert_impl_all!(Customer: Clone, Send, Sync, Eq, std::hash::Hash);
assert_impl_all!(CustomerKind: Copy, Send, Sync, Eq, std::hash::Hash);

impl Customer {
    /// Creates an eligible customer
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when `id` is not a valid [`CustomerId`].
    pub fn eligible(id: &str) -> Result<Self, ValidationError> {
        Self::create(CustomerKind::Eligible, id)
    }

    /// Creates a registered customer who is not eligible
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when `id` is not a valid [`CustomerId`].
    pub fn registered(id: &str) -> Result<Self, ValidationError> {
        Self::create(CustomerKind::Registered, id)
    }

    /// Creates a guest
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when `id` is not a valid [`CustomerId`].
    pub fn guest(id: &str) -> Result<Self, ValidationError> {
        Self::create(CustomerKind::Guest, id)
    }

    /// Creates a customer of the given kind from a raw id
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when `id` is not a valid [`CustomerId`].
    pub fn create(kind: CustomerKind, id: &str) -> Result<Self, ValidationError> {
        CustomerId::create(CustomerId::FIELD_NAME, id).map(|id| Self::from_parts(kind, id))
    }

    /// Creates a customer from untyped labels, e.g. `("Guest", "Sarah")`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the kind label is unknown or the id is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use customer_discount::customer::Customer;
    ///
    /// let mary = Customer::parse("eligible", "Mary").unwrap();
    /// assert!(mary.is_eligible());
    ///
    /// assert!(Customer::parse("Premium", "Mary").is_err());
    /// ```
    pub fn parse(kind: &str, id: &str) -> Result<Self, ValidationError> {
        let kind = kind.parse::<CustomerKind>()?;
        Self::create(kind, id)
    }

    /// Builds the case named by `kind` around a validated id
    #[must_use]
    pub fn from_parts(kind: CustomerKind, id: CustomerId) -> Self {
        match kind {
            CustomerKind::Eligible => Self::Eligible(RegisteredCustomer::new(id)),
            CustomerKind::Registered => Self::Registered(RegisteredCustomer::new(id)),
            CustomerKind::Guest => Self::Guest(UnregisteredCustomer::new(id)),
        }
    }

    /// Returns which case this customer is
    #[must_use]
    pub const fn kind(&self) -> CustomerKind {
        match self {
            Self::Eligible(_) => CustomerKind::Eligible,
            Self::Registered(_) => CustomerKind::Registered,
            Self::Guest(_) => CustomerKind::Guest,
        }
    }

    /// Returns the customer id
    #[must_use]
    pub const fn id(&self) -> &CustomerId {
        match self {
            Self::Eligible(customer) | Self::Registered(customer) => customer.id(),
            Self::Guest(customer) => customer.id(),
        }
    }

    /// Returns `true` for the [`Customer::Eligible`] case
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible(_))
    }

    /// Returns `true` unless this is a guest
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        !matches!(self, Self::Guest(_))
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eligible(customer) => write!(formatter, "VIP Customer: {}", customer.id()),
            Self::Registered(customer) => {
                write!(formatter, "Regular Customer: {}", customer.id())
            }
            Self::Guest(customer) => write!(formatter, "Guest: {}", customer.id()),
        }
    }
}
