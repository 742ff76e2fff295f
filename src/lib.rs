//! # customer-discount
//!
//! Customer discount rules used to show how a sum type makes illegal domain
//! states unrepresentable.
//!
//! ## Overview
//!
//! A registered customer who is eligible for the loyalty discount gets 10%
//! off a spend of 100 or more; everybody else pays in full. The crate keeps
//! three models of the customer side by side:
//!
//! - [`iterations::naive`]: two booleans. "Eligible but not registered" is
//!   constructible, and the defective rule discounts it.
//! - [`iterations::flagged`]: registered-or-guest, eligibility still a flag.
//! - [`customer`]: `Eligible | Registered | Guest`. The final model.
//!
//! ## Module Structure
//!
//! - `simple_types`: constrained primitives (`CustomerId`, `Spend`)
//! - `customer`: the closed customer union
//! - `discount`: totals, bonus and labels over the final model
//! - `iterations`: the earlier models, kept as negative examples
//! - `config`, `demo`: settings and narration for the binary
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for ids, spends and customers
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use customer_discount::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let richard = Customer::registered("Richard").unwrap();
//! let spend = Spend::create(dec!(100)).unwrap();
//!
//! assert_eq!(calculate_total(&richard, spend), dec!(100));
//! assert_eq!(describe_customer(&richard), "Regular Customer: Richard");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the final customer model and its discount functions.
pub mod prelude {
    pub use crate::customer::{Customer, CustomerKind, RegisteredCustomer, UnregisteredCustomer};
    pub use crate::discount::{calculate_total, calculate_with_bonus, describe_customer};
    pub use crate::simple_types::{CustomerId, Spend, ValidationError};
}

pub mod config;
pub mod customer;
pub mod demo;
pub mod discount;
pub mod iterations;
pub mod simple_types;
