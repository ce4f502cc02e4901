// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Synthetic signal generator configuration
//!
//! This module defines the structure configuring the damped sinusoid used as
//! a stand-in for a photoacoustic A-line.

use serde::{Deserialize, Serialize};

use crate::signal::GenerationParams;

/// Configuration of the synthetic A-line.
///
/// The defaults describe a 5 MHz transducer response decaying with a time
/// constant of 1 µs, sampled by a 100 MS/s digitizer for 10 µs.
///
/// # Example
///
/// ```
/// use photoacoustic_pipeline::config::GeneratorConfig;
///
/// let generator = GeneratorConfig {
///     sample_count: 100,
///     sampling_interval: 1e-6,
///     decay_rate: 5e5,
///     frequency: 2e6,
///     amplitude: 1.0,
/// };
/// assert_eq!(generator.to_params().sample_count, 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of samples in the generated signal
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Time between two samples in seconds
    #[serde(default = "default_sampling_interval")]
    pub sampling_interval: f64,

    /// Exponential decay constant in s⁻¹
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,

    /// Oscillation frequency in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Peak scaling factor
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_sample_count() -> usize {
    1000
}

fn default_sampling_interval() -> f64 {
    1e-8
}

fn default_decay_rate() -> f64 {
    1e6
}

fn default_frequency() -> f64 {
    5e6
}

fn default_amplitude() -> f64 {
    1.0
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            sampling_interval: default_sampling_interval(),
            decay_rate: default_decay_rate(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
        }
    }
}

impl GeneratorConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams {
            sample_count: self.sample_count,
            sampling_interval: self.sampling_interval,
            decay_rate: self.decay_rate,
            frequency: self.frequency,
            amplitude: self.amplitude,
        }
    }
}
