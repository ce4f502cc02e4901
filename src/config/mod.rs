// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration management for the signal pipeline
//!
//! This module provides functionality for loading, validating, and applying
//! configuration settings. The configuration is backed by a YAML file and
//! validated against a JSON schema embedded in the binary.
//!
//! ## Configuration Structure
//!
//! - `generator`: parameters of the synthetic damped sinusoid
//! - `output`: CSV and JSON report locations
//! - `oximetry`: calibration of the two-wavelength sO₂ estimator
//!
//! Every field has a default, so an empty file is a valid configuration.
//!
//! ## Usage
//!
//! ```no_run
//! use photoacoustic_pipeline::config::Config;
//! use std::path::Path;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file(Path::new("config.yaml")).unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(2048), // Sample count
//!     None,       // Sampling interval
//!     None,       // Decay rate
//!     Some(3e6),  // Frequency
//!     None,       // Amplitude
//!     None,       // CSV output
//!     None,       // JSON report
//! );
//!
//! println!("Samples: {}", config.generator.sample_count);
//! ```

pub mod generator;
pub mod oximetry;
pub mod output;
pub mod utils;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

pub use generator::GeneratorConfig;
pub use oximetry::OximetryConfig;
pub use output::OutputConfig;
pub use utils::{output_config_schema, validate_specific_rules, CONFIG_SCHEMA};

/// Root configuration structure.
///
/// Each section falls back to its defaults when absent from the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Parameters of the synthetic signal
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Output file locations
    #[serde(default)]
    pub output: OutputConfig,

    /// sO₂ estimator calibration
    #[serde(default)]
    pub oximetry: OximetryConfig,
}

impl Config {
    /// Helper method to create a sample config file when validation fails
    fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let sample_path = path.with_extension("sample.yaml");
        debug!("Original path: {:?}, Sample path: {:?}", path, sample_path);

        if let Some(parent) = sample_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create parent directory for sample config at {:?}",
                        parent
                    )
                })?;
            }
        }

        Self::default()
            .save_to_file(&sample_path)
            .with_context(|| format!("Failed to save sample config to {:?}", sample_path))?;

        error!(
            "Sample configuration file created at {:?}\nPlease edit and rename it",
            sample_path
        );
        Ok(())
    }

    /// Load configuration from a file.
    ///
    /// A missing file is created with the default values. A file that fails
    /// schema validation, deserialization or the specific rules makes the
    /// load fail and leaves a `*.sample.yaml` with defaults next to it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Configuration file not found at {:?}, creating default",
                path
            );
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        debug!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at {:?}", path))?;

        // An empty or comment-only document stands for an empty mapping
        let yaml_value: serde_yml::Value = if contents.trim().is_empty() {
            serde_yml::Value::Mapping(Default::default())
        } else {
            match serde_yml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML configuration from {:?}", path))?
            {
                serde_yml::Value::Null => serde_yml::Value::Mapping(Default::default()),
                value => value,
            }
        };

        let json_value = serde_json::to_value(&yaml_value)
            .context("Failed to convert YAML to JSON for validation")?;
        debug!("Raw YAML converted to JSON for validation: {:?}", json_value);

        let schema: serde_json::Value =
            serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;
        let validator = jsonschema::draft202012::options()
            .should_validate_formats(true)
            .build(&schema)
            .context("Failed to compile JSON schema")?;

        debug!("Validating {} configuration against schema", path.display());
        if let Err(error) = validator.validate(&json_value) {
            error!("Configuration validation error before deserialization");
            Self::create_sample_config(path)?;
            anyhow::bail!("Configuration validation failed: {}", error);
        }

        let config: Config = match serde_yml::from_value(yaml_value) {
            Ok(config) => config,
            Err(err) => {
                error!("Configuration deserialization error: {}", err);
                if let Err(e) = Self::create_sample_config(path) {
                    error!("Failed to create sample config: {}", e);
                }
                return Err(anyhow::anyhow!(
                    "Failed to deserialize configuration from {}: {}",
                    path.display(),
                    err
                ));
            }
        };

        if let Err(err) = validate_specific_rules(&config) {
            error!("Configuration specific validation error: {}", err);
            Self::create_sample_config(path)?;
            return Err(err);
        }

        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml =
            serde_yml::to_string(self).context("Failed to serialize configuration to YAML")?;

        let mut file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create config file at {:?}", path.as_ref()))?;

        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Apply command line arguments to override configuration values.
    ///
    /// Only the values actually provided on the command line replace the
    /// ones loaded from the file (or the defaults).
    ///
    /// # Parameters
    ///
    /// * `sample_count` - Number of samples to generate
    /// * `sampling_interval` - Seconds between samples
    /// * `decay_rate` - Exponential decay constant in s⁻¹
    /// * `frequency` - Oscillation frequency in Hz
    /// * `amplitude` - Peak scaling factor
    /// * `csv_path` - CSV output file
    /// * `report_path` - JSON report file
    #[allow(clippy::too_many_arguments)]
    pub fn apply_args(
        &mut self,
        sample_count: Option<usize>,
        sampling_interval: Option<f64>,
        decay_rate: Option<f64>,
        frequency: Option<f64>,
        amplitude: Option<f64>,
        csv_path: Option<PathBuf>,
        report_path: Option<PathBuf>,
    ) {
        if let Some(count) = sample_count {
            debug!("Overriding sample count from command line: {}", count);
            self.generator.sample_count = count;
        }
        if let Some(interval) = sampling_interval {
            debug!("Overriding sampling interval from command line: {}", interval);
            self.generator.sampling_interval = interval;
        }
        if let Some(decay) = decay_rate {
            debug!("Overriding decay rate from command line: {}", decay);
            self.generator.decay_rate = decay;
        }
        if let Some(freq) = frequency {
            debug!("Overriding frequency from command line: {}", freq);
            self.generator.frequency = freq;
        }
        if let Some(amp) = amplitude {
            debug!("Overriding amplitude from command line: {}", amp);
            self.generator.amplitude = amp;
        }
        if let Some(path) = csv_path {
            debug!("Overriding CSV output from command line: {:?}", path);
            self.output.csv_path = path;
        }
        if let Some(path) = report_path {
            debug!("Overriding report output from command line: {:?}", path);
            self.output.report_path = Some(path);
        }
    }

    /// Run the schema-independent checks on an in-memory configuration
    pub fn validate(&self) -> Result<()> {
        validate_specific_rules(self)
    }
}
