// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Oxygen saturation estimation configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::oximetry::{Calibration, DEFAULT_R_MAX, DEFAULT_R_MIN};

/// Calibration and output of the `oxy_estimation` tool.
///
/// `r_min` and `r_max` are the amplitude ratios observed for 0 % and 100 %
/// oxygenated tissue. They should come from phantom or blood-sample
/// measurements of the actual system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OximetryConfig {
    /// Ratio corresponding to 0 % oxygenation
    #[serde(default = "default_r_min")]
    pub r_min: f64,

    /// Ratio corresponding to 100 % oxygenation
    #[serde(default = "default_r_max")]
    pub r_max: f64,

    /// File receiving one sO₂ estimate per line
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_r_min() -> f64 {
    DEFAULT_R_MIN
}

fn default_r_max() -> f64 {
    DEFAULT_R_MAX
}

fn default_output_path() -> PathBuf {
    PathBuf::from("estimated_so2.csv")
}

impl Default for OximetryConfig {
    fn default() -> Self {
        Self {
            r_min: default_r_min(),
            r_max: default_r_max(),
            output_path: default_output_path(),
        }
    }
}

impl OximetryConfig {
    pub fn calibration(&self) -> Calibration {
        Calibration {
            r_min: self.r_min,
            r_max: self.r_max,
        }
    }
}
