// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use anyhow::Result;
use approx::assert_abs_diff_eq;
use photoacoustic_pipeline::config::Config;
use photoacoustic_pipeline::oximetry::{estimate_so2, read_amplitudes, write_estimates};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_two_wavelength_files_to_estimates() -> Result<()> {
    let temp_dir = tempdir()?;
    let wl1 = temp_dir.path().join("data_wavelength1.csv");
    let wl2 = temp_dir.path().join("data_wavelength2.csv");
    let out = temp_dir.path().join("estimated_so2.csv");

    fs::write(&wl1, "0.4\n0.8\n1.2\n2.0\n")?;
    fs::write(&wl2, "1.0\n1.0\n1.0\n0.0\n")?;

    let pa1 = read_amplitudes(&wl1)?;
    let pa2 = read_amplitudes(&wl2)?;
    let so2 = estimate_so2(&pa1, &pa2, &Config::default().oximetry.calibration())?;
    write_estimates(&out, &so2)?;

    // The last pair has a zero denominator and is dropped
    assert_eq!(so2.len(), 3);
    assert_abs_diff_eq!(so2[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(so2[1], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(so2[2], 1.0, epsilon = 1e-12);

    let written = read_amplitudes(&out)?;
    assert_eq!(written, so2);

    Ok(())
}

#[test]
fn test_estimates_stay_in_unit_interval() -> Result<()> {
    let pa1: Vec<f64> = (0..50).map(|i| i as f64 * 0.1 - 1.0).collect();
    let pa2 = vec![1.0; 50];

    let so2 = estimate_so2(&pa1, &pa2, &Config::default().oximetry.calibration())?;

    assert_eq!(so2.len(), 50);
    assert!(so2.iter().all(|s| (0.0..=1.0).contains(s)));

    Ok(())
}
