// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Damped Sinusoid Generator
//!
//! A photoacoustic transient recorded by a single detector (an A-line) is
//! commonly approximated by an exponentially decaying sinusoid:
//!
//! ```text
//! x(t) = A · exp(-α·t) · sin(2π·f·t)
//! ```
//!
//! where `A` is the amplitude, `α` the decay rate in s⁻¹ and `f` the
//! oscillation frequency in Hz. The signal is sampled at `t = i · Δt` for
//! `i` in `0..sample_count`.
//!
//! ## Examples
//!
//! ```rust
//! use photoacoustic_pipeline::signal::generate;
//!
//! // 100 samples at 1 MHz sampling, 50 kHz oscillation decaying at 2e4 s⁻¹
//! let signal = generate(100, 1e-6, 2e4, 5e4, 1.0).unwrap();
//! assert_eq!(signal.len(), 100);
//! assert_eq!(signal.samples()[0], 0.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::Signal;
use crate::error::{PipelineError, Result};

/// Largest signal the generator will allocate (128 MiB of samples)
pub const MAX_SAMPLE_COUNT: usize = 1 << 24;

/// Parameters of a damped sinusoid.
///
/// Grouping the five inputs lets the configuration, the pipeline and the
/// analysis report share a single value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of samples to produce, between 1 and [`MAX_SAMPLE_COUNT`]
    pub sample_count: usize,
    /// Seconds between two samples, must be strictly positive
    pub sampling_interval: f64,
    /// Exponential decay constant in s⁻¹
    pub decay_rate: f64,
    /// Oscillation frequency in Hz
    pub frequency: f64,
    /// Peak scaling factor of the envelope
    pub amplitude: f64,
}

impl GenerationParams {
    /// Check the parameters the generator cannot work without
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(PipelineError::invalid_argument(
                "sample_count must be greater than zero",
            ));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(PipelineError::invalid_argument(format!(
                "sample_count must not exceed {}, got {}",
                MAX_SAMPLE_COUNT, self.sample_count
            )));
        }
        if !self.sampling_interval.is_finite() || self.sampling_interval <= 0.0 {
            return Err(PipelineError::invalid_argument(format!(
                "sampling_interval must be a positive finite number, got {}",
                self.sampling_interval
            )));
        }
        for (name, value) in [
            ("decay_rate", self.decay_rate),
            ("frequency", self.frequency),
            ("amplitude", self.amplitude),
        ] {
            if !value.is_finite() {
                return Err(PipelineError::invalid_argument(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Value of the damped sinusoid at elapsed time `t`
    pub fn sample_at(&self, t: f64) -> f64 {
        self.amplitude * (-self.decay_rate * t).exp() * (2.0 * PI * self.frequency * t).sin()
    }

    /// Produce the signal described by these parameters
    pub fn generate(&self) -> Result<Signal> {
        self.validate()?;
        debug!(
            "Generating {} samples (dt={} s, decay={} 1/s, f={} Hz, A={})",
            self.sample_count, self.sampling_interval, self.decay_rate, self.frequency, self.amplitude
        );

        let mut samples = Vec::with_capacity(self.sample_count);
        for i in 0..self.sample_count {
            let t = i as f64 * self.sampling_interval;
            samples.push(self.sample_at(t));
        }

        Ok(Signal::from(samples))
    }
}

/// Generate a damped sinusoid of `sample_count` samples.
///
/// # Errors
///
/// [`PipelineError::InvalidArgument`] when `sample_count` is zero or above
/// [`MAX_SAMPLE_COUNT`], when `sampling_interval` is not strictly positive,
/// or when any other parameter is NaN or infinite.
pub fn generate(
    sample_count: usize,
    sampling_interval: f64,
    decay_rate: f64,
    frequency: f64,
    amplitude: f64,
) -> Result<Signal> {
    GenerationParams {
        sample_count,
        sampling_interval,
        decay_rate,
        frequency,
        amplitude,
    }
    .generate()
}
