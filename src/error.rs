// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error type shared by the signal, output and oximetry modules

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the processing layer
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Malformed generation parameters, empty signal or unparsable data row
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The file at `path` could not be opened, read or written
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        PipelineError::InvalidArgument(reason.into())
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PipelineError::InvalidArgument(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, PipelineError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
