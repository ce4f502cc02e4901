// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Output module
//!
//! Persistence of signals to CSV files and of analysis results to JSON.

pub mod csv;
pub mod report;

pub use self::csv::{read_csv, write_csv, CSV_HEADER};
pub use report::AnalysisReport;
