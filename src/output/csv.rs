// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! CSV persistence of a signal
//!
//! The format is a `time,amplitude` header followed by one row per sample in
//! ascending time order. Both fields are numbers, so no quoting is needed.
//! Values are written with the shortest representation that parses back to
//! the same `f64`, which makes a write/read cycle lossless.

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::signal::Signal;

/// Header row of a signal file
pub const CSV_HEADER: &str = "time,amplitude";

/// Write `signal` to `path`, truncating any existing file.
///
/// The time column is `i * sampling_interval`. A failure part way through
/// leaves an incomplete file behind.
pub fn write_csv<P: AsRef<Path>>(path: P, signal: &Signal, sampling_interval: f64) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} samples to {:?}", signal.len(), path);

    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADER).map_err(|e| PipelineError::io(path, e))?;
    for (t, value) in signal.times(sampling_interval).zip(signal.iter()) {
        writeln!(writer, "{},{}", t, value).map_err(|e| PipelineError::io(path, e))?;
    }
    writer.flush().map_err(|e| PipelineError::io(path, e))?;

    info!("Signal saved to {}", path.display());
    Ok(())
}

/// Read back the amplitude column of a file written by [`write_csv`].
///
/// The header row and blank lines are skipped. Any other row must hold two
/// numeric fields.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PipelineError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| PipelineError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() || line == CSV_HEADER {
            continue;
        }
        samples.push(parse_row(line, index + 1)?);
    }

    debug!("Read {} samples from {:?}", samples.len(), path);
    Ok(Signal::from(samples))
}

fn parse_row(line: &str, line_number: usize) -> Result<f64> {
    let mut fields = line.split(',');
    let (Some(time), Some(amplitude), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(PipelineError::invalid_argument(format!(
            "line {}: expected 2 fields, got '{}'",
            line_number, line
        )));
    };

    time.trim().parse::<f64>().map_err(|e| {
        PipelineError::invalid_argument(format!("line {}: bad time '{}': {}", line_number, time, e))
    })?;
    amplitude.trim().parse::<f64>().map_err(|e| {
        PipelineError::invalid_argument(format!(
            "line {}: bad amplitude '{}': {}",
            line_number, amplitude, e
        ))
    })
}
