// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! JSON summary of one pipeline run

use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::signal::{GenerationParams, SignalMetrics};

/// Result of a photoacoustic analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Parameters the signal was generated with
    pub parameters: GenerationParams,
    /// Number of samples analysed
    pub sample_count: usize,
    /// Peak amplitude and average energy
    pub metrics: SignalMetrics,
    /// Timestamp of the analysis
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl AnalysisReport {
    pub fn new(parameters: GenerationParams, sample_count: usize, metrics: SignalMetrics) -> Self {
        Self {
            parameters,
            sample_count,
            metrics,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Write the two metric lines printed at the end of a run:
    ///
    /// ```text
    /// Peak amplitude: <value>
    /// Average energy: <value>
    /// ```
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Peak amplitude: {}", self.metrics.peak_amplitude)?;
        writeln!(out, "Average energy: {}", self.metrics.average_energy)
    }

    /// Save the report as pretty-printed JSON.
    ///
    /// Every failure, including one raised by the JSON encoder while
    /// streaming to the file, is reported as [`PipelineError::Io`].
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| PipelineError::io(path, io::Error::from(e)))?;
        writer.flush().map_err(|e| PipelineError::io(path, e))?;
        info!("Analysis report saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn params() -> GenerationParams {
        GenerationParams {
            sample_count: 3,
            sampling_interval: 1e-6,
            decay_rate: 0.0,
            frequency: 1e5,
            amplitude: 1.0,
        }
    }

    #[test]
    fn test_report_json_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let metrics = SignalMetrics {
            peak_amplitude: 0.5,
            average_energy: 0.125,
        };

        AnalysisReport::new(params(), 3, metrics)
            .save_to_file(&path)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["sample_count"], 3);
        assert_eq!(value["metrics"]["peak_amplitude"], 0.5);
        assert_eq!(value["parameters"]["frequency"], 1e5);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_summary_lines() {
        let metrics = SignalMetrics {
            peak_amplitude: 0.75,
            average_energy: 0.125,
        };
        let mut out = Vec::new();

        AnalysisReport::new(params(), 3, metrics)
            .write_summary(&mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Peak amplitude: 0.75\nAverage energy: 0.125\n"
        );
    }

    #[test]
    fn test_save_failures_are_io_errors() {
        let dir = tempdir().unwrap();
        let metrics = SignalMetrics {
            peak_amplitude: 1.0,
            average_energy: 0.5,
        };
        let report = AnalysisReport::new(params(), 3, metrics);

        // a directory cannot be opened as a file
        let err = report.save_to_file(dir.path()).unwrap_err();
        assert!(err.is_io());

        let err = report
            .save_to_file(dir.path().join("missing").join("report.json"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_non_finite_metrics_still_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let metrics = SignalMetrics {
            peak_amplitude: f64::NAN,
            average_energy: f64::INFINITY,
        };

        AnalysisReport::new(params(), 3, metrics)
            .save_to_file(&path)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["metrics"]["peak_amplitude"].is_null());
        assert!(value["metrics"]["average_energy"].is_null());
    }
}
