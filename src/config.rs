//! Demo configuration
//!
//! Presentation settings for the demo binary, read once at startup from the
//! environment (and a `.env` file when present). The discount threshold and
//! rates are constants in [`crate::discount`] and are not configurable.
//!
//! # Environment Variables
//!
//! - `DISCOUNT_DEMO_CURRENCY`: symbol printed before amounts (default: `£`)
//! - `DISCOUNT_DEMO_SECTIONS`: comma separated subset of `naive`, `flagged`,
//!   `explicit` (default: all three, in that order)

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Name of the currency symbol variable
pub const CURRENCY_KEY: &str = "DISCOUNT_DEMO_CURRENCY";

/// Name of the section list variable
pub const SECTIONS_KEY: &str = "DISCOUNT_DEMO_SECTIONS";

const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// Errors raised while reading [`DemoConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}

/// One part of the demo narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoSection {
    /// Iteration 0, boolean flags
    Naive,
    /// Iteration 1, union with an eligibility flag
    Flagged,
    /// Iteration 2, explicit cases
    Explicit,
}

impl DemoSection {
    /// Every section, in narration order
    pub const ALL: [Self; 3] = [Self::Naive, Self::Flagged, Self::Explicit];

    /// Returns the name used in `DISCOUNT_DEMO_SECTIONS`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Flagged => "flagged",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for DemoSection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for DemoSection {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ConfigError::InvalidValue {
                key: SECTIONS_KEY.to_string(),
                message: format!("unknown section '{}'", value.trim()),
            })
    }
}

/// Settings for the demo binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Symbol printed before every amount.
    pub currency_symbol: String,
    /// Sections to print, in order.
    pub sections: Vec<DemoSection>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            sections: DemoSection::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to [`DemoConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty currency symbol, an
    /// unknown section name, or a section list that selects nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use customer_discount::config::{DemoConfig, DemoSection};
    ///
    /// let config = DemoConfig::from_lookup(|key| match key {
    ///     "DISCOUNT_DEMO_SECTIONS" => Some("explicit".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.currency_symbol, "£");
    /// assert_eq!(config.sections, vec![DemoSection::Explicit]);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency_symbol = match lookup(CURRENCY_KEY) {
            Some(symbol) if symbol.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: CURRENCY_KEY.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            Some(symbol) => symbol.trim().to_string(),
            None => defaults.currency_symbol,
        };

        let sections = match lookup(SECTIONS_KEY) {
            Some(list) => parse_sections(&list)?,
            None => defaults.sections,
        };

        Ok(Self {
            currency_symbol,
            sections,
        })
    }
}

fn parse_sections(list: &str) -> Result<Vec<DemoSection>, ConfigError> {
    let mut sections = Vec::new();
    for name in list.split(',').filter(|name| !name.trim().is_empty()) {
        let section = name.parse::<DemoSection>()?;
        if !sections.contains(&section) {
            sections.push(section);
        }
    }

    if sections.is_empty() {
        Err(ConfigError::InvalidValue {
            key: SECTIONS_KEY.to_string(),
            message: "must name at least one section".to_string(),
        })
    } else {
        Ok(sections)
    }
}
