// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Photoacoustic signal pipeline library
//!
//! Generates synthetic photoacoustic A-lines, summarises them with scalar
//! metrics, persists them as CSV, and estimates oxygen saturation from
//! two-wavelength amplitude measurements.

pub mod config;
pub mod error;
pub mod oximetry;
pub mod output;
pub mod pipeline;
pub mod signal;

pub use error::PipelineError;
pub use pipeline::SignalPipeline;
pub use signal::Signal;
