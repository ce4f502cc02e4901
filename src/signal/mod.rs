// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal processing module
//!
//! This module holds the in-memory representation of a single photoacoustic
//! A-line, the synthetic generator producing it and the scalar metrics
//! computed from it. Nothing here touches hardware or the file system; the
//! acquisition side of a future system only has to hand over a [`Signal`].

pub mod generator;
pub mod metrics;
#[cfg(test)]
mod generator_test;

pub use generator::{generate, GenerationParams, MAX_SAMPLE_COUNT};
pub use metrics::{compute_average_energy, compute_peak_amplitude, SignalMetrics};

/// An ordered, immutable sequence of samples.
///
/// Index order is time order. The sampling interval is not stored here: it is
/// carried by whoever produced the signal (see [`GenerationParams`]) and passed
/// explicitly to the functions that need a time axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the samples in time order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Elapsed time of each sample, `i * sampling_interval`
    pub fn times(&self, sampling_interval: f64) -> impl Iterator<Item = f64> + '_ {
        (0..self.samples.len()).map(move |i| i as f64 * sampling_interval)
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
