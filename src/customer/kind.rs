//! Fieldless discriminant of [`Customer`](super::Customer)

use std::fmt;
use std::str::FromStr;

use crate::simple_types::ValidationError;

/// Which of the three customer cases a value is, without its payload.
///
/// Parsing is the one place an unknown classification can appear at run
/// time, so it is rejected here instead of falling through to a default.
///
/// # Examples
///
/// ```
/// use customer_discount::customer::CustomerKind;
///
/// assert_eq!("guest".parse::<CustomerKind>().unwrap(), CustomerKind::Guest);
/// assert!("Grinch".parse::<CustomerKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomerKind {
    /// Registered and eligible
    Eligible,
    /// Registered, not eligible
    Registered,
    /// Not registered
    Guest,
}

impl CustomerKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 3] = [Self::Eligible, Self::Registered, Self::Guest];

    const FIELD_NAME: &'static str = "CustomerKind";

    /// Returns the canonical label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::Registered => "Registered",
            Self::Guest => "Guest",
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for CustomerKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                ValidationError::new(
                    Self::FIELD_NAME,
                    &format!("Unknown customer kind '{value}', must be one of 'Eligible', 'Registered', 'Guest'"),
                )
            })
    }
}
