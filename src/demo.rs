//! Console narration for each modeling iteration
//!
//! Every function builds its sample customers from literals and returns the
//! lines to print, so the binary only has to write them out. Total lines
//! read `"<Name> (<classification>, £<spend>): £<total>"`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::{DemoConfig, DemoSection};
use crate::customer::Customer;
use crate::discount::{calculate_total, calculate_with_bonus, describe_customer};
use crate::iterations::{flagged, naive};
use crate::simple_types::{CustomerId, Spend, ValidationError};

/// Formats one total line
#[must_use]
pub fn total_line(
    name: &str,
    classification: &str,
    spend: Spend,
    total: Decimal,
    currency_symbol: &str,
) -> String {
    format!(
        "{name} ({classification}, {currency_symbol}{:.2}): {currency_symbol}{total:.2}",
        spend.value()
    )
}

/// The four legal sample customers of the final model with their spend.
///
/// John and Mary are eligible (spending 100 and 99), Richard is registered
/// and Sarah is a guest (both spending 100).
///
/// # Errors
///
/// Returns `ValidationError` if a sample literal fails validation.
pub fn sample_customers() -> Result<Vec<(Customer, Spend)>, ValidationError> {
    Ok(vec![
        (Customer::eligible("John")?, Spend::unsafe_create(dec!(100))),
        (Customer::eligible("Mary")?, Spend::unsafe_create(dec!(99))),
        (Customer::registered("Richard")?, Spend::unsafe_create(dec!(100))),
        (Customer::guest("Sarah")?, Spend::unsafe_create(dec!(100))),
    ])
}

const fn naive_classification(customer: &naive::NaiveCustomer) -> &'static str {
    match (customer.is_eligible, customer.is_registered) {
        (true, true) => "Eligible + Registered",
        (false, true) => "Registered",
        (false, false) => "Guest",
        (true, false) => "Eligible but NOT Registered",
    }
}

/// Narration for iteration 0.
///
/// Totals use the defective rule, so the illegal Grinch is discounted.
///
/// # Errors
///
/// Returns `ValidationError` if a sample literal fails validation.
pub fn naive_lines(config: &DemoConfig) -> Result<Vec<String>, ValidationError> {
    let symbol = config.currency_symbol.as_str();
    let customers = [
        ("John", true, true),
        ("Mary", true, true),
        ("Richard", false, true),
        ("Sarah", false, false),
        ("Grinch", true, false),
    ];
    let spends = [dec!(100), dec!(99), dec!(100), dec!(100), dec!(100)];

    let mut lines = vec![
        "=== Iteration 0: Naive Model ===".to_string(),
        "Problem: Can create illegal states!".to_string(),
    ];
    let mut grinch_total = None;
    for ((name, is_eligible, is_registered), amount) in customers.into_iter().zip(spends) {
        let customer = naive::NaiveCustomer::new(
            CustomerId::create(CustomerId::FIELD_NAME, name)?,
            is_eligible,
            is_registered,
        );
        let spend = Spend::unsafe_create(amount);
        let total = naive::calculate_total_defective(&customer, spend);
        lines.push(total_line(
            name,
            naive_classification(&customer),
            spend,
            total,
            symbol,
        ));
        if !customer.is_legal() {
            grinch_total = Some(naive::calculate_total(&customer, spend));
        }
    }

    lines.push("^ This shouldn't be possible! The type system doesn't prevent it.".to_string());
    if let Some(total) = grinch_total {
        lines.push(format!(
            "Checking both flags gives {symbol}{total:.2}, but only if every caller remembers to."
        ));
    }
    Ok(lines)
}

/// Narration for iteration 1.
///
/// # Errors
///
/// Returns `ValidationError` if a sample literal fails validation.
pub fn flagged_lines(config: &DemoConfig) -> Result<Vec<String>, ValidationError> {
    let symbol = config.currency_symbol.as_str();
    let spend = Spend::unsafe_create(dec!(100));
    let customers = [
        (
            "John",
            "Registered, Eligible",
            flagged::Customer::Registered(flagged::RegisteredCustomer::new(
                CustomerId::create(CustomerId::FIELD_NAME, "John")?,
                true,
            )),
        ),
        (
            "Richard",
            "Registered, NOT Eligible",
            flagged::Customer::Registered(flagged::RegisteredCustomer::new(
                CustomerId::create(CustomerId::FIELD_NAME, "Richard")?,
                false,
            )),
        ),
        (
            "Sarah",
            "Guest",
            flagged::Customer::Guest(flagged::UnregisteredCustomer::new(CustomerId::create(
                CustomerId::FIELD_NAME,
                "Sarah",
            )?)),
        ),
    ];

    let mut lines = vec![
        "=== Iteration 1: Union With Eligibility Flag ===".to_string(),
        "Better: Can't be eligible without being registered!".to_string(),
    ];
    lines.extend(customers.iter().map(|(name, classification, customer)| {
        total_line(
            name,
            classification,
            spend,
            flagged::calculate_total(customer, spend),
            symbol,
        )
    }));
    lines.push("A guest has no eligibility flag, so an eligible guest cannot be built.".to_string());
    Ok(lines)
}

/// Narration for iteration 2, the final model.
///
/// # Errors
///
/// Returns `ValidationError` if a sample literal fails validation.
pub fn explicit_lines(config: &DemoConfig) -> Result<Vec<String>, ValidationError> {
    let symbol = config.currency_symbol.as_str();
    let customers = sample_customers()?;

    let mut lines = vec![
        "=== Iteration 2: Explicit Eligibility ===".to_string(),
        "Best: Domain language is explicit in the type!".to_string(),
    ];
    lines.extend(customers.iter().map(|(customer, spend)| {
        total_line(
            customer.id().value(),
            customer.kind().label(),
            *spend,
            calculate_total(customer, *spend),
            symbol,
        )
    }));

    lines.push("--- Pattern Matching ---".to_string());
    lines.extend(
        customers
            .iter()
            .filter(|(customer, _)| customer.id().value() != "Mary")
            .map(|(customer, _)| describe_customer(customer)),
    );

    lines.push("--- Bonus Calculation ---".to_string());
    if let Some((john, spend)) = customers.first() {
        lines.push(total_line(
            "John with bonus",
            john.kind().label(),
            *spend,
            calculate_with_bonus(john, *spend),
            symbol,
        ));
    }

    lines.push("--- Accessors ---".to_string());
    let alice = Customer::eligible("Alice")?;
    let alice_spend = Spend::unsafe_create(dec!(150));
    lines.push(format!(
        "Customer {} (Eligible: {}) spends {symbol}{:.2}: {symbol}{:.2}",
        alice.id(),
        alice.is_eligible(),
        alice_spend.value(),
        calculate_total(&alice, alice_spend)
    ));

    lines.push("No booleans to check. No illegal states possible.".to_string());
    Ok(lines)
}

/// Renders the sections selected by `config`, separated by blank lines.
///
/// # Errors
///
/// Returns `ValidationError` if a sample literal fails validation.
pub fn render(config: &DemoConfig) -> Result<Vec<String>, ValidationError> {
    let mut output = Vec::new();
    for section in &config.sections {
        let lines = match section {
            DemoSection::Naive => naive_lines(config)?,
            DemoSection::Flagged => flagged_lines(config)?,
            DemoSection::Explicit => explicit_lines(config)?,
        };
        tracing::debug!(section = %section, lines = lines.len(), "rendered demo section");

        if !output.is_empty() {
            output.push(String::new());
        }
        output.extend(lines);
    }
    Ok(output)
}
