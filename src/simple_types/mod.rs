//! Constrained primitive types
//!
//! Newtypes that can only hold validated values, built with the smart
//! constructor pattern.
//!
//! - `CustomerId`: non-empty, at most 50 characters
//! - `Spend`: non-negative decimal amount
//!
//! ```
//! use customer_discount::simple_types::{CustomerId, Spend};
//! use rust_decimal_macros::dec;
//!
//! let id = CustomerId::create("CustomerId", "Mary").unwrap();
//! let spend = Spend::create(dec!(99)).unwrap();
//! assert_eq!(id.value(), "Mary");
//! assert_eq!(spend.value(), dec!(99));
//! ```

pub mod constrained_type;
mod customer_id;
mod error;
mod spend;

pub use customer_id::CustomerId;
pub use error::ValidationError;
pub use spend::Spend;
