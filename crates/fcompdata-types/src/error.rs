//! Error types for fcompdata.

use std::path::PathBuf;
use thiserror::Error;

use crate::{Frequency, FrequencyParseError, SeriesTypeParseError};

/// Result type alias for fcompdata operations.
pub type Result<T> = std::result::Result<T, FcompError>;

/// Errors that can occur while loading, indexing or caching datasets.
#[derive(Error, Debug)]
pub enum FcompError {
    /// The backing data file does not exist.
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Malformed structured data or a record failing validation.
    #[error("Parse error in {origin}: {message}")]
    Parse {
        /// The file or dataset being parsed.
        origin: String,
        /// What went wrong.
        message: String,
    },

    /// A 1-based dataset index was out of range.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Unknown M4 frequency name.
    #[error(transparent)]
    UnknownFrequency(#[from] FrequencyParseError),

    /// Unknown series type name.
    #[error(transparent)]
    UnknownSeriesType(#[from] SeriesTypeParseError),

    /// Downloading a remote dataset file failed.
    #[error("Download of {dataset} {frequency} failed: {message}")]
    Download {
        /// The remote dataset name.
        dataset: String,
        /// The frequency whose download failed.
        frequency: Frequency,
        /// Description of the transport or write failure.
        message: String,
    },

    /// The HTTP client could not be set up.
    #[error("HTTP error: {0}")]
    Http(String),

    /// No home directory could be determined for the data cache.
    #[error("Failed to determine a home directory for the data cache")]
    NoDataHome,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FcompError {
    /// Creates a parse error for the given origin.
    pub fn parse(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error means the backing resource is missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error for an index outside `1..=len`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Series {index} not found in {dataset} dataset (valid indices are 1..={len})")]
pub struct RangeError {
    /// The requested 1-based index.
    pub index: usize,
    /// Number of series in the dataset.
    pub len: usize,
    /// Name of the dataset.
    pub dataset: String,
}
