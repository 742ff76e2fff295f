//! customer-discount
//!
//! Prints the discount demo for each customer model in turn.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//!
//! # only the final model, in dollars, with debug logs on stderr
//! DISCOUNT_DEMO_SECTIONS=explicit DISCOUNT_DEMO_CURRENCY='$' RUST_LOG=debug cargo run
//! ```

use std::process::ExitCode;

use customer_discount::config::DemoConfig;
use customer_discount::demo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            DemoConfig::default()
        }
    };
    tracing::debug!(
        currency_symbol = %config.currency_symbol,
        sections = ?config.sections,
        "configuration loaded"
    );

    match demo::render(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("Sample data failed validation: {error}");
            ExitCode::FAILURE
        }
    }
}
