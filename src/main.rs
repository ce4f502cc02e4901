// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point for the photoacoustic signal pipeline
// Without arguments: generate the default A-line, print its metrics and
// write it to signal.csv in the working directory

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;

use photoacoustic_pipeline::config::{self, Config};
use photoacoustic_pipeline::SignalPipeline;

/// Synthetic photoacoustic A-line generator and analyzer
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (YAML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file for the signal (CSV)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file for the analysis report (JSON)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Number of samples to generate
    #[arg(long)]
    sample_count: Option<usize>,

    /// Time between samples in seconds
    #[arg(long)]
    sampling_interval: Option<f64>,

    /// Exponential decay constant in 1/s
    #[arg(long)]
    decay_rate: Option<f64>,

    /// Oscillation frequency in Hz
    #[arg(long)]
    frequency: Option<f64>,

    /// Peak scaling factor
    #[arg(long)]
    amplitude: Option<f64>,

    /// Path to a configuration to validate and exit
    #[arg(long)]
    validate_config: Option<PathBuf>,

    /// Output the configuration schema as JSON and exit
    #[arg(long)]
    show_config_schema: bool,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Disable all logging output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.quiet {
        log::LevelFilter::Off
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if args.show_config_schema {
        return config::output_config_schema();
    }

    if let Some(validate_path) = args.validate_config {
        if !validate_path.exists() {
            return Err(anyhow::anyhow!(
                "Configuration file does not exist: {}",
                validate_path.display()
            ));
        }

        Config::from_file(&validate_path)
            .map_err(|err| anyhow::anyhow!("Configuration validation failed: {}", err))?;
        println!("Configuration file is valid: {}", validate_path.display());
        return Ok(());
    }

    // Defaults are built in, a file is only read when asked for
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    config.apply_args(
        args.sample_count,
        args.sampling_interval,
        args.decay_rate,
        args.frequency,
        args.amplitude,
        args.output,
        args.report,
    );
    config.validate()?;

    let pipeline = SignalPipeline::new(config);
    let report = pipeline.run().context("Signal pipeline failed")?;

    report
        .write_summary(&mut io::stdout().lock())
        .context("Failed to print the summary")?;
    info!(
        "Signal written to {}",
        pipeline.config().output.csv_path.display()
    );

    Ok(())
}
