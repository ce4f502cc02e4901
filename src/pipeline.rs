// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Generate → analyze → persist
//!
//! [`SignalPipeline`] sequences the three steps of a run. It is synchronous
//! and single-shot: a failure at any step is returned as is and the whole run
//! is expected to be executed again.

use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::output::{write_csv, AnalysisReport};
use crate::signal::{GenerationParams, Signal, SignalMetrics};

/// One run of the signal pipeline
pub struct SignalPipeline {
    config: Config,
}

impl SignalPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn params(&self) -> GenerationParams {
        self.config.generator.to_params()
    }

    /// Generate the configured signal without analysing or saving it
    pub fn generate(&self) -> Result<Signal> {
        self.params().generate()
    }

    /// Run all steps and return the report.
    ///
    /// The CSV file is always written; the JSON report only when a report
    /// path is configured.
    pub fn run(&self) -> Result<AnalysisReport> {
        let params = self.params();

        let signal = self.generate()?;
        info!("Generated {} samples", signal.len());

        let metrics = SignalMetrics::compute(&signal)?;
        info!(
            "Peak amplitude {:.6}, average energy {:.6}",
            metrics.peak_amplitude, metrics.average_energy
        );

        write_csv(&self.config.output.csv_path, &signal, params.sampling_interval)?;

        let report = AnalysisReport::new(params, signal.len(), metrics);
        if let Some(report_path) = &self.config.output.report_path {
            report.save_to_file(report_path)?;
        }

        Ok(report)
    }
}
