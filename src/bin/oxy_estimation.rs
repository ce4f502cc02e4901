// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Oxygen saturation estimator
// Reads photoacoustic amplitudes measured at two wavelengths and writes one
// sO2 estimate per amplitude pair

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use photoacoustic_pipeline::config::Config;
use photoacoustic_pipeline::oximetry::{estimate_so2, read_amplitudes, write_estimates};

/// Estimate sO2 with the ratio-of-ratios method
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Amplitudes at wavelength 1, one per line
    #[arg(value_name = "WAVELENGTH1_FILE")]
    wavelength1: PathBuf,

    /// Amplitudes at wavelength 2, one per line
    #[arg(value_name = "WAVELENGTH2_FILE")]
    wavelength2: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Ratio corresponding to 0% oxygenation
    #[arg(long)]
    r_min: Option<f64>,

    /// Ratio corresponding to 100% oxygenation
    #[arg(long)]
    r_max: Option<f64>,

    /// Path to configuration file (YAML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let mut oximetry = match &args.config {
        Some(path) => Config::from_file(path)?.oximetry,
        None => Config::default().oximetry,
    };
    if let Some(r_min) = args.r_min {
        oximetry.r_min = r_min;
    }
    if let Some(r_max) = args.r_max {
        oximetry.r_max = r_max;
    }
    if let Some(output) = args.output {
        oximetry.output_path = output;
    }

    let pa_wl1 = read_amplitudes(&args.wavelength1)
        .with_context(|| format!("Cannot read {}", args.wavelength1.display()))?;
    let pa_wl2 = read_amplitudes(&args.wavelength2)
        .with_context(|| format!("Cannot read {}", args.wavelength2.display()))?;
    info!(
        "Read {} and {} amplitudes",
        pa_wl1.len(),
        pa_wl2.len()
    );

    let so2 = estimate_so2(&pa_wl1, &pa_wl2, &oximetry.calibration())?;
    write_estimates(&oximetry.output_path, &so2)?;

    println!(
        "Estimated sO₂ values for {} points written to '{}'.",
        so2.len(),
        oximetry.output_path.display()
    );

    Ok(())
}
