//! Earlier, weaker customer models
//!
//! Each stage is kept as its own module so the difference from the final
//! [`Customer`](crate::customer::Customer) stays visible:
//!
//! - `naive`: two independent booleans; the illegal state is constructible
//! - `flagged`: registered-or-guest union with an eligibility boolean
//!
//! The final stage is [`crate::customer`] together with [`crate::discount`].

pub mod flagged;
pub mod naive;
