//! Helper functions for building constrained types
//!
//! Each helper validates a raw value and hands it to the newtype's
//! constructor only when the constraint holds.

use rust_decimal::Decimal;

use super::error::ValidationError;

/// Creates a string type with a maximum length constraint
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is empty or longer than
/// `max_length` characters.
///
/// # Examples
///
/// ```
/// use customer_discount::simple_types::constrained_type;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// assert!(constrained_type::create_string("Name", Name, 10, "John").is_ok());
/// assert!(constrained_type::create_string("Name", Name, 10, "").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if value.chars().count() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(constructor(value.to_string()))
    }
}

/// Creates a decimal type with a lower bound and no upper bound
///
/// # Errors
///
/// Returns [`ValidationError`] when the input is less than `min_value`.
pub fn create_decimal_at_least<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    value: Decimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[derive(Debug, PartialEq)]
    struct Label(String);

    #[derive(Debug, PartialEq)]
    struct Amount(Decimal);

    #[rstest]
    #[case("a", true)]
    #[case("abcde", true)]
    #[case("abcdef", false)]
    #[case("", false)]
    fn test_create_string_bounds(#[case] input: &str, #[case] accepted: bool) {
        let result = create_string("Label", Label, 5, input);

        assert_eq!(result.is_ok(), accepted);
    }

    #[rstest]
    fn test_create_string_counts_chars_not_bytes() {
        let result = create_string("Label", Label, 5, "£££££");

        assert_eq!(result, Ok(Label("£££££".to_string())));
    }

    #[rstest]
    fn test_create_string_error_message() {
        let error = create_string("Label", Label, 3, "abcd").unwrap_err();

        assert_eq!(error.to_string(), "Label: Must not be more than 3 chars");
    }

    #[rstest]
    #[case(dec!(0), true)]
    #[case(dec!(0.01), true)]
    #[case(dec!(-0.01), false)]
    fn test_create_decimal_at_least(#[case] input: Decimal, #[case] accepted: bool) {
        let result = create_decimal_at_least("Amount", Amount, Decimal::ZERO, input);

        assert_eq!(result.is_ok(), accepted);
    }
}
