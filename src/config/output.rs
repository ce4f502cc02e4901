// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Output locations of a pipeline run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the pipeline writes its results.
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file receiving the generated signal
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// Optional JSON file receiving the analysis report
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("signal.csv")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            report_path: None,
        }
    }
}
