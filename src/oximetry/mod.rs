// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Oxygen Saturation Estimation
//!
//! Estimates tissue oxygen saturation (sO₂) from photoacoustic amplitudes
//! measured at two wavelengths with the ratio-of-ratios method: the ratio
//! `r = a₁ / a₂` is mapped linearly from `[r_min, r_max]` onto `[0, 1]`
//! and clamped.
//!
//! `r_min` is the ratio of fully deoxygenated tissue and `r_max` the ratio of
//! fully oxygenated tissue. Real systems determine both from reference
//! phantoms or blood samples; the defaults are placeholders.
//!
//! ```rust
//! use photoacoustic_pipeline::oximetry::{estimate_so2, Calibration};
//!
//! let so2 = estimate_so2(&[0.8, 1.2], &[1.0, 1.0], &Calibration::default()).unwrap();
//! assert!((so2[0] - 0.5).abs() < 1e-12);
//! assert_eq!(so2[1], 1.0);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Ratio of deoxygenated tissue used when nothing else is configured
pub const DEFAULT_R_MIN: f64 = 0.4;
/// Ratio of fully oxygenated tissue used when nothing else is configured
pub const DEFAULT_R_MAX: f64 = 1.2;

/// Linear calibration of the amplitude ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub r_min: f64,
    pub r_max: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            r_min: DEFAULT_R_MIN,
            r_max: DEFAULT_R_MAX,
        }
    }
}

impl Calibration {
    pub fn validate(&self) -> Result<()> {
        if !self.r_min.is_finite() || !self.r_max.is_finite() {
            return Err(PipelineError::invalid_argument(
                "calibration ratios must be finite",
            ));
        }
        if self.r_max <= self.r_min {
            return Err(PipelineError::invalid_argument(format!(
                "r_max ({}) must be greater than r_min ({})",
                self.r_max, self.r_min
            )));
        }
        Ok(())
    }

    /// Saturation for one amplitude ratio, clamped to [0, 1]
    pub fn saturation(&self, ratio: f64) -> f64 {
        ((ratio - self.r_min) / (self.r_max - self.r_min)).clamp(0.0, 1.0)
    }
}

/// Read one amplitude per row from the first column of a CSV file.
///
/// Empty rows and rows whose first field is not a number are skipped, so a
/// header line is tolerated.
pub fn read_amplitudes<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;

    let mut amplitudes = Vec::new();
    for line in contents.lines() {
        let first = line.split(',').next().unwrap_or_default().trim();
        if first.is_empty() {
            continue;
        }
        match first.parse::<f64>() {
            Ok(value) => amplitudes.push(value),
            Err(_) => debug!("Skipping non-numeric row '{}' in {:?}", line, path),
        }
    }

    Ok(amplitudes)
}

/// Estimate sO₂ for each pair of amplitudes.
///
/// The inputs are paired index by index and the shorter one sets the number
/// of pairs. Pairs whose second amplitude is zero have no ratio and are
/// dropped, so the result may be shorter than either input.
pub fn estimate_so2(pa1: &[f64], pa2: &[f64], calibration: &Calibration) -> Result<Vec<f64>> {
    calibration.validate()?;

    if pa1.len() != pa2.len() {
        warn!(
            "Amplitude series differ in length ({} vs {}), extra values are ignored",
            pa1.len(),
            pa2.len()
        );
    }

    let estimates: Vec<f64> = pa1
        .iter()
        .zip(pa2)
        .filter(|&(_, &a2)| a2 != 0.0)
        .map(|(&a1, &a2)| calibration.saturation(a1 / a2))
        .collect();

    debug!(
        "Estimated {} sO2 values from {} amplitude pairs",
        estimates.len(),
        pa1.len().min(pa2.len())
    );
    Ok(estimates)
}

/// Write one estimate per line, without header
pub fn write_estimates<P: AsRef<Path>>(path: P, estimates: &[f64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for value in estimates {
        writeln!(writer, "{}", value).map_err(|e| PipelineError::io(path, e))?;
    }
    writer.flush().map_err(|e| PipelineError::io(path, e))
}
