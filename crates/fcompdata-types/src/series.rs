//! A single competition time series.

use serde::Serialize;
use thiserror::Error;

use crate::SeriesType;

/// Field names exposed by [`Series::field`], in R `Mcomp` order.
pub const SERIES_KEYS: [&str; 8] = ["sn", "x", "xx", "h", "period", "type", "n", "description"];

/// Errors raised when a series violates its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The training segment has no observations.
    #[error("series '{sn}' has an empty training segment")]
    EmptyTraining {
        /// The series identifier.
        sn: String,
    },

    /// The declared horizon differs from the test segment length.
    #[error("series '{sn}' declares horizon {horizon} but has {test_len} test values")]
    HorizonMismatch {
        /// The series identifier.
        sn: String,
        /// The declared forecast horizon.
        horizon: usize,
        /// The actual test segment length.
        test_len: usize,
    },
}

/// One univariate series split into a training and a held-out test segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Series name (e.g. "N0001").
    sn: String,
    /// Training (in-sample) observations.
    x: Vec<f64>,
    /// Test (out-of-sample) observations.
    xx: Vec<f64>,
    /// Forecast horizon.
    h: usize,
    /// Seasonal period.
    period: u32,
    /// Sampling class.
    #[serde(rename = "type")]
    series_type: SeriesType,
    /// Free-text description.
    description: String,
}

impl Series {
    /// Creates a validated series.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is empty or `horizon != xx.len()`.
    pub fn new(
        sn: impl Into<String>,
        x: Vec<f64>,
        xx: Vec<f64>,
        horizon: usize,
        period: u32,
        series_type: SeriesType,
        description: impl Into<String>,
    ) -> Result<Self, SeriesError> {
        let sn = sn.into();
        if x.is_empty() {
            return Err(SeriesError::EmptyTraining { sn });
        }
        if horizon != xx.len() {
            return Err(SeriesError::HorizonMismatch {
                sn,
                horizon,
                test_len: xx.len(),
            });
        }
        Ok(Self {
            sn,
            x,
            xx,
            h: horizon,
            period,
            series_type,
            description: description.into(),
        })
    }

    /// Returns the series identifier.
    #[must_use]
    pub fn sn(&self) -> &str {
        &self.sn
    }

    /// Returns the training observations.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the test observations.
    #[must_use]
    pub fn xx(&self) -> &[f64] {
        &self.xx
    }

    /// Returns the forecast horizon.
    #[must_use]
    pub const fn h(&self) -> usize {
        self.h
    }

    /// Returns the seasonal period.
    #[must_use]
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Returns the series type.
    #[must_use]
    pub const fn series_type(&self) -> SeriesType {
        self.series_type
    }

    /// Returns the length of the training segment.
    #[must_use]
    pub fn n(&self) -> usize {
        self.x.len()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the field names understood by [`Series::field`].
    #[must_use]
    pub const fn keys() -> &'static [&'static str] {
        &SERIES_KEYS
    }

    /// Looks up a field by its R name.
    ///
    /// Mapping-style view for callers that address fields by name, such as
    /// code ported from R. Prefer the typed accessors otherwise.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<SeriesField<'_>> {
        let field = match key {
            "sn" => SeriesField::Text(&self.sn),
            "x" => SeriesField::Values(&self.x),
            "xx" => SeriesField::Values(&self.xx),
            "h" => SeriesField::Count(self.h),
            "period" => SeriesField::Count(self.period as usize),
            "type" => SeriesField::Type(self.series_type),
            "n" => SeriesField::Count(self.n()),
            "description" => SeriesField::Text(&self.description),
            _ => return None,
        };
        Some(field)
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Series(sn='{}', n={}, h={}, type='{}')",
            self.sn,
            self.n(),
            self.h,
            self.series_type
        )
    }
}

/// Borrowed value of a named [`Series`] field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesField<'a> {
    /// A string field (`sn`, `description`).
    Text(&'a str),
    /// An observation vector (`x`, `xx`).
    Values(&'a [f64]),
    /// An integer field (`h`, `period`, `n`).
    Count(usize),
    /// The series type.
    Type(SeriesType),
}
