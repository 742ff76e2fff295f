//! Every case is matched by name; adding a fourth case breaks this program.

use customer_discount::customer::Customer;

fn greeting(customer: &Customer) -> String {
    match customer {
        Customer::Eligible(registered) => format!("Welcome back, {}!", registered.id()),
        Customer::Registered(registered) => format!("Hello, {}.", registered.id()),
        Customer::Guest(guest) => format!("Hi {}, want to register?", guest.id()),
    }
}

fn main() {
    let john = Customer::eligible("John").unwrap();
    let sarah = Customer::guest("Sarah").unwrap();

    assert_eq!(greeting(&john), "Welcome back, John!");
    assert_eq!(greeting(&sarah), "Hi Sarah, want to register?");
}
