//! Data from the flagged model converts into the final model.

use customer_discount::customer::{Customer, CustomerKind};
use customer_discount::iterations::flagged;
use customer_discount::simple_types::CustomerId;

fn main() {
    let id = CustomerId::create("CustomerId", "Richard").unwrap();
    let richard = flagged::Customer::Registered(flagged::RegisteredCustomer::new(id, false));

    let upgraded: Customer = richard.into();

    assert_eq!(upgraded.kind(), CustomerKind::Registered);
}
