// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration utilities
//!
//! This module provides utility functions for working with configuration
//! settings, including validation and schema management.

use anyhow::{Context, Result};
use log::debug;

use super::Config;

/// JSON schema the YAML configuration is validated against
pub const CONFIG_SCHEMA: &str = include_str!("../../resources/config.schema.json");

/// Output the embedded JSON schema to the console.
///
/// This function is called when the `--show-config-schema` flag is provided
/// on the command line.
///
/// # Example
///
/// ```bash
/// ./photoacoustic_pipeline --show-config-schema > config_schema.json
/// ```
pub fn output_config_schema() -> Result<()> {
    let schema: serde_json::Value =
        serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;

    let formatted_schema =
        serde_json::to_string_pretty(&schema).context("Failed to format JSON schema")?;

    println!("{}", formatted_schema);

    Ok(())
}

/// Validates the configuration against rules the JSON schema cannot express.
///
/// # Validation Rules
///
/// - **Generator**: everything `GenerationParams::validate` checks, plus a
///   non-negative decay rate and a strictly positive frequency
/// - **Output**: a non-empty CSV path
/// - **Oximetry**: finite ratios with `r_max > r_min`
pub fn validate_specific_rules(config: &Config) -> Result<()> {
    debug!("Performing additional validation checks");

    let generator = &config.generator;
    generator
        .to_params()
        .validate()
        .context("Invalid generator section")?;

    if generator.decay_rate < 0.0 {
        anyhow::bail!(
            "Invalid generator section: decay_rate must not be negative, got {}",
            generator.decay_rate
        );
    }
    if generator.frequency <= 0.0 {
        anyhow::bail!(
            "Invalid generator section: frequency must be strictly positive, got {}",
            generator.frequency
        );
    }

    if config.output.csv_path.as_os_str().is_empty() {
        anyhow::bail!("Invalid output section: csv_path cannot be empty");
    }

    config
        .oximetry
        .calibration()
        .validate()
        .context("Invalid oximetry section")?;

    Ok(())
}
