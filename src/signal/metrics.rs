// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Scalar summary metrics of a signal

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Maximum absolute sample value.
///
/// Fails with `InvalidArgument` on an empty signal since the maximum is
/// undefined. A NaN sample makes the peak NaN, as it does the energy.
pub fn compute_peak_amplitude(signal: impl AsRef<[f64]>) -> Result<f64> {
    let samples = non_empty(signal.as_ref(), "peak amplitude")?;
    // f64::max drops NaN operands
    Ok(samples.iter().fold(0.0_f64, |peak, &x| {
        if peak.is_nan() || x.is_nan() {
            f64::NAN
        } else {
            peak.max(x.abs())
        }
    }))
}

/// Arithmetic mean of the squared samples (mean power proxy).
pub fn compute_average_energy(signal: impl AsRef<[f64]>) -> Result<f64> {
    let samples = non_empty(signal.as_ref(), "average energy")?;
    let sum: f64 = samples.iter().map(|&x| x * x).sum();
    Ok(sum / samples.len() as f64)
}

fn non_empty<'a>(samples: &'a [f64], metric: &str) -> Result<&'a [f64]> {
    if samples.is_empty() {
        return Err(PipelineError::invalid_argument(format!(
            "cannot compute {} of an empty signal",
            metric
        )));
    }
    Ok(samples)
}

/// Both metrics of one signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalMetrics {
    pub peak_amplitude: f64,
    pub average_energy: f64,
}

impl SignalMetrics {
    pub fn compute(signal: impl AsRef<[f64]>) -> Result<Self> {
        let samples = signal.as_ref();
        Ok(Self {
            peak_amplitude: compute_peak_amplitude(samples)?,
            average_energy: compute_average_energy(samples)?,
        })
    }
}
